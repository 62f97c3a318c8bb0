//! Response type definitions
//!
//! Defines the probe outcome returned by the API and the health-check
//! response.

use serde::{Deserialize, Serialize};

/// Classification result of one login probe
///
/// Exactly one of four shapes is produced per probe:
/// - `success=false` with a message: the matrícula is absent, or the portal
///   reported some other error (message passed through verbatim)
/// - `success=true` with a message: the matrícula exists, credentials were
///   rejected as expected
/// - `success=true` with `data`: the portal unexpectedly accepted the probe;
///   the raw decoded page is passed through untouched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeOutcome {
    /// Whether the matrícula was found (or the probe was accepted)
    pub success: bool,

    /// Human-readable classification message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Raw portal page when the probe was unexpectedly accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl ProbeOutcome {
    /// Probe failed: matrícula absent, portal error, or internal failure
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Matrícula exists; the portal rejected only the credentials
    pub fn found(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// The portal rendered no error block; pass the raw page through
    pub fn accepted(data: impl Into<String>) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data.into()),
        }
    }
}

/// Ping response for health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Server uptime in seconds
    pub server_uptime: u64,

    /// Server version
    pub version: String,
}

impl PingResponse {
    /// Create a new ping response
    pub fn new(server_uptime: u64, version: impl Into<String>) -> Self {
        Self {
            server_uptime,
            version: version.into(),
        }
    }
}
