//! Login probe core
//!
//! This module owns the whole probe workflow: the portal transport with its
//! per-probe cookie session, the HTML scraping of login tokens and error
//! text, and the orchestration that classifies the portal's response into a
//! probe outcome.

pub mod manager;
pub mod portal;
pub mod scrape;

pub use manager::{SessionManager, SessionManagerGeneric};
pub use portal::{HttpPortal, HttpSession, PortalProvider, PortalSession};
pub use scrape::LoginPageTokens;
