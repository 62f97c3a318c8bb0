//! Request type definitions
//!
//! Defines the structure of the probe endpoint's request body.

use serde::{Deserialize, Serialize};

/// Request body for the matrícula existence check
///
/// `matricula` is required by the endpoint, but kept optional here so the
/// handler can reject a missing field with a proper 400 body instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeRequest {
    /// Enrollment number to probe
    pub matricula: Option<String>,
}

impl ProbeRequest {
    /// Create a new empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the matrícula
    pub fn with_matricula(mut self, matricula: impl Into<String>) -> Self {
        self.matricula = Some(matricula.into());
        self
    }
}
