//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
pub mod helpers {
    use matricula_probe::config::Settings;

    /// Create test settings pointed at a mock portal
    pub fn settings_for_portal(base_url: &str) -> Settings {
        let mut settings = Settings::default();
        settings.portal.base_url = base_url.to_string();
        settings
    }

    /// Encode text as ISO-8859-1 bytes, the charset the portal serves
    pub fn latin1(text: &str) -> Vec<u8> {
        text.chars()
            .map(|c| {
                let code = c as u32;
                assert!(code <= 0xFF, "character {:?} is not latin-1", c);
                code as u8
            })
            .collect()
    }
}
