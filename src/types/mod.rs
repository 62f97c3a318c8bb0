//! Type definitions
//!
//! Request and response types for the probe API.

pub mod request;
pub mod response;

pub use request::ProbeRequest;
pub use response::{PingResponse, ProbeOutcome};
