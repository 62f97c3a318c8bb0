//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the probe service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration settings for the probe service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerSettings,
    /// Target portal configuration
    pub portal: PortalSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
}

/// Target portal configuration
///
/// The classification markers live here rather than in the classifier: they
/// are tied to the exact wording of one external portal and must be
/// adjustable without touching the matching logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalSettings {
    /// Base address of the portal
    pub base_url: String,
    /// Path of the login page, also the probe submission target
    pub login_path: String,
    /// Placeholder password submitted with every probe
    pub probe_password: String,
    /// Accept-Language header; keeps portal messages in Portuguese so the
    /// markers below actually match
    pub accept_language: String,
    /// Per-request timeout for portal calls
    pub request_timeout: Duration,
    /// Error-text substring meaning the matrícula is not registered
    pub not_found_marker: String,
    /// Error-text substring meaning the matrícula exists but the password
    /// was rejected
    pub invalid_credentials_marker: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "::".to_string(),
                port: 3000,
            },
            portal: PortalSettings {
                base_url: "https://www.alunoonline.uerj.br".to_string(),
                login_path: "/requisicaoaluno/".to_string(),
                probe_password: "0000".to_string(),
                accept_language: "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7".to_string(),
                request_timeout: Duration::from_secs(30),
                not_found_marker: "não existe".to_string(),
                invalid_credentials_marker: "Credenciais Inválidas".to_string(),
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                verbose: false,
            },
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut settings = Self::default();

        // Load server settings from environment
        if let Ok(host) = std::env::var("PROBE_SERVER_HOST") {
            settings.server.host = host;
        }

        if let Ok(port) = std::env::var("PROBE_SERVER_PORT") {
            settings.server.port = port
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid port: {}", e)))?;
        }

        // Portal overrides, mainly useful for pointing tests at a mock portal
        if let Ok(base_url) = std::env::var("PORTAL_BASE_URL") {
            settings.portal.base_url = base_url;
        }

        Ok(settings)
    }
}
