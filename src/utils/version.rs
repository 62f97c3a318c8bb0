//! Version information

/// Get the crate version
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
