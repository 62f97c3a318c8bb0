//! Error handling
//!
//! Error types and result alias used throughout the probe service.

pub mod types;

pub use types::{Error, Result};
