//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::{Result, config::Settings, session::SessionManager};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Session manager running the login probes
    pub session_manager: Arc<SessionManager>,
    /// Application settings
    pub settings: Arc<Settings>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

/// Create the main Axum application with routes and middleware
pub fn create_app(settings: Settings) -> Result<Router> {
    let session_manager = Arc::new(SessionManager::new(settings.clone())?);

    let state = AppState {
        session_manager,
        settings: Arc::new(settings),
        start_time: std::time::Instant::now(),
    };

    // The original consumers are mobile/web apps on other origins, so CORS
    // stays wide open
    Ok(Router::new()
        .route(
            "/existeMatricula",
            post(super::handlers::check_matricula),
        )
        .route("/ping", get(super::handlers::ping))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app() {
        let settings = Settings::default();
        let app = create_app(settings);
        assert!(app.is_ok());
    }

    #[test]
    fn test_create_app_rejects_bad_portal_url() {
        let mut settings = Settings::default();
        settings.portal.base_url = "definitely not a url".to_string();
        assert!(create_app(settings).is_err());
    }
}
