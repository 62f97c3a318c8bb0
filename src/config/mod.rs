//! Configuration management
//!
//! Settings for the HTTP server, the target portal, and logging.

pub mod settings;

pub use settings::{LoggingSettings, PortalSettings, ServerSettings, Settings};
