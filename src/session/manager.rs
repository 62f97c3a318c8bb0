//! Probe orchestration
//!
//! Runs the four-stage login probe against the portal and classifies the
//! response. One invocation is a linear sequence: open a fresh session,
//! fetch the login page, extract the hidden tokens, submit the probe with
//! the placeholder password, then match the rendered error text.
//!
//! Failures before the probe submission (session setup, login-page fetch,
//! empty login page) propagate as errors so the HTTP layer can answer with
//! its internal-error body. A failure of the probe submission itself is a
//! classified outcome, not an error: the portal rejected the login request
//! and the caller gets the generic login-failure message.

use crate::{
    Result,
    config::Settings,
    error::Error,
    session::portal::{HttpPortal, PortalProvider, PortalSession},
    session::scrape,
    types::ProbeOutcome,
};
use std::sync::Arc;

/// Message for a matrícula the portal does not know
pub const NOT_FOUND_MESSAGE: &str = "Matrícula não existe no sistema";

/// Message for a matrícula the portal knows but whose credentials failed
pub const FOUND_MESSAGE: &str = "Matrícula encontrada no sistema";

/// Message when the probe submission itself fails
pub const LOGIN_ERROR_MESSAGE: &str = "Erro ao fazer login";

/// Convenience type alias for SessionManager with the real portal transport
pub type SessionManager = SessionManagerGeneric<HttpPortal>;

/// Probe orchestrator, generic over the portal transport
#[derive(Debug)]
pub struct SessionManagerGeneric<P: PortalProvider = HttpPortal> {
    /// Configuration settings
    settings: Arc<Settings>,
    /// Portal transport; opens one isolated session per probe
    portal: P,
}

impl SessionManagerGeneric<HttpPortal> {
    /// Creates a new session manager with the given configuration
    pub fn new(settings: Settings) -> Result<Self> {
        let portal = HttpPortal::new(&settings.portal)?;
        Ok(Self {
            settings: Arc::new(settings),
            portal,
        })
    }
}

#[cfg(test)]
impl<P: PortalProvider> SessionManagerGeneric<P> {
    /// Creates a session manager with a custom portal transport for testing
    pub fn new_with_provider(settings: Settings, portal: P) -> Self {
        Self {
            settings: Arc::new(settings),
            portal,
        }
    }
}

impl<P: PortalProvider> SessionManagerGeneric<P> {
    /// Probe the portal for the existence of a matrícula
    ///
    /// Returns one of four outcome shapes for any reachable portal; errors
    /// are reserved for failures before the probe submission.
    pub async fn check_matricula(&self, matricula: &str) -> Result<ProbeOutcome> {
        tracing::debug!(matricula = %matricula, "starting login probe");

        // Stage 1: fresh session, no cookies carried over from prior probes
        let session = self.portal.open()?;

        // Stage 2: fetch the login page to obtain the hidden form tokens
        let login_page = session.request(None).await?;
        if login_page.trim().is_empty() {
            return Err(Error::login_page("login page response body was empty"));
        }

        // Stage 3: token extraction is total; missing tokens flow onward and
        // surface as a portal-side rejection in stage 4
        let tokens = scrape::extract_login_tokens(&login_page);
        if tokens.request_id.is_empty() {
            tracing::warn!("login page carried no requisicao input, submitting probe anyway");
        }

        // Stage 4: submit the probe and classify the response
        let params = [
            ("requisicao", tokens.request_id.as_str()),
            ("matricula", matricula),
            ("senha", self.settings.portal.probe_password.as_str()),
            ("_token", tokens.csrf_token.as_str()),
        ];
        match session.request(Some(&params)).await {
            Ok(body) => Ok(self.classify(body)),
            Err(e) => {
                tracing::error!(matricula = %matricula, "probe submission failed: {}", e);
                Ok(ProbeOutcome::failure(LOGIN_ERROR_MESSAGE))
            }
        }
    }

    /// Classify the portal's response body
    ///
    /// First match wins: the not-found marker takes priority over the
    /// invalid-credentials marker, any other rendered error text is passed
    /// through verbatim, and a page with no error block at all is returned
    /// to the caller as-is.
    fn classify(&self, body: String) -> ProbeOutcome {
        let reason = scrape::extract_error_text(&body);
        if reason.is_empty() {
            tracing::warn!("portal rendered no error block, passing page through");
            return ProbeOutcome::accepted(body);
        }

        let portal = &self.settings.portal;
        if reason.contains(&portal.not_found_marker) {
            tracing::info!("matrícula not registered in the portal");
            ProbeOutcome::failure(NOT_FOUND_MESSAGE)
        } else if reason.contains(&portal.invalid_credentials_marker) {
            tracing::info!("matrícula exists, credentials rejected as expected");
            ProbeOutcome::found(FOUND_MESSAGE)
        } else {
            tracing::info!(reason = %reason, "portal reported an unrecognized condition");
            ProbeOutcome::failure(reason)
        }
    }
}
