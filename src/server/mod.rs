//! HTTP server shell
//!
//! Axum application setup and request handlers for the probe endpoint.

pub mod app;
pub mod handlers;

pub use app::{AppState, create_app};
