//! HTTP request handlers
//!
//! Implementation of the probe endpoint and the health check.

use crate::{
    server::app::AppState,
    types::{PingResponse, ProbeOutcome, ProbeRequest},
    utils::version,
};
use axum::{extract::State, http::StatusCode, response::Json};

/// Message for a request body without a matrícula
pub const MISSING_MATRICULA_MESSAGE: &str = "Matrícula é obrigatória";

/// Message for unexpected internal failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Matrícula existence check endpoint
///
/// POST /existeMatricula
///
/// Validates the body, runs one login probe against the portal, and returns
/// the classified outcome. Business failures (matrícula absent, portal
/// errors) are 200 responses with `success:false`; only failures before the
/// probe submission map to 500.
pub async fn check_matricula(
    State(state): State<AppState>,
    Json(request): Json<ProbeRequest>,
) -> (StatusCode, Json<ProbeOutcome>) {
    let matricula = match request.matricula.as_deref().map(str::trim) {
        Some(matricula) if !matricula.is_empty() => matricula.to_string(),
        _ => {
            tracing::debug!("rejecting request without matrícula");
            return (
                StatusCode::BAD_REQUEST,
                Json(ProbeOutcome::failure(MISSING_MATRICULA_MESSAGE)),
            );
        }
    };

    match state.session_manager.check_matricula(&matricula).await {
        Ok(outcome) => {
            tracing::info!(
                matricula = %matricula,
                success = outcome.success,
                "probe classified"
            );
            (StatusCode::OK, Json(outcome))
        }
        Err(e) => {
            tracing::error!(matricula = %matricula, "probe failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProbeOutcome::failure(INTERNAL_ERROR_MESSAGE)),
            )
        }
    }
}

/// Ping endpoint for health checks
///
/// GET /ping
///
/// Returns server status and uptime information.
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    let response = PingResponse::new(uptime, version::get_version());

    tracing::debug!(
        "Ping response: uptime={}s, version={}",
        uptime,
        version::get_version()
    );
    Json(response)
}
