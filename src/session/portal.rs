//! Portal transport
//!
//! HTTP access to the Aluno Online portal. Every probe gets its own session
//! with a fresh cookie jar, so concurrent probes can never interleave cookie
//! state; within one probe the jar carries cookies between the login-page
//! fetch and the probe submission.

use crate::{Result, config::PortalSettings, error::Error};
use reqwest::{
    Client,
    cookie::Jar,
    header::{self, HeaderMap, HeaderValue},
};
use std::sync::Arc;
use url::Url;

/// Opens isolated portal sessions
///
/// The trait seam lets the probe orchestrator run against a scripted stub in
/// tests instead of the real portal.
pub trait PortalProvider {
    type Session: PortalSession;

    /// Open a fresh session with no inherited cookie state
    fn open(&self) -> Result<Self::Session>;
}

/// One isolated portal session: two requests sharing a cookie jar
#[allow(async_fn_in_trait)]
pub trait PortalSession {
    /// GET the login endpoint, optionally with probe query parameters, and
    /// return the response body decoded from the portal's legacy charset
    async fn request(&self, params: Option<&[(&str, &str)]>) -> Result<String>;
}

/// Portal access over reqwest
#[derive(Debug, Clone)]
pub struct HttpPortal {
    settings: PortalSettings,
    login_url: Url,
}

impl HttpPortal {
    /// Create a portal handle, validating the configured base address
    pub fn new(settings: &PortalSettings) -> Result<Self> {
        let base = Url::parse(&settings.base_url)
            .map_err(|e| Error::config(format!("Invalid portal base URL: {}", e)))?;
        let login_url = base
            .join(&settings.login_path)
            .map_err(|e| Error::config(format!("Invalid portal login path: {}", e)))?;

        Ok(Self {
            settings: settings.clone(),
            login_url,
        })
    }
}

impl PortalProvider for HttpPortal {
    type Session = HttpSession;

    fn open(&self) -> Result<HttpSession> {
        let mut headers = HeaderMap::new();
        // The portal expects form-encoded submissions even though the login
        // flow runs over GET query parameters
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_str(&self.settings.accept_language)
                .map_err(|e| Error::session(format!("Invalid Accept-Language value: {}", e)))?,
        );

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(jar)
            .default_headers(headers)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|e| Error::session(format!("Failed to build portal client: {}", e)))?;

        Ok(HttpSession {
            client,
            login_url: self.login_url.clone(),
        })
    }
}

/// reqwest-backed portal session
#[derive(Debug)]
pub struct HttpSession {
    client: Client,
    login_url: Url,
}

impl PortalSession for HttpSession {
    async fn request(&self, params: Option<&[(&str, &str)]>) -> Result<String> {
        let mut request = self.client.get(self.login_url.clone());
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = request.send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        // The portal serves ISO-8859-1 regardless of any declared charset;
        // decoding as UTF-8 would mangle the accented text the classifier
        // matches on. WINDOWS_1252 is the WHATWG decoder for that label.
        let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
        Ok(text.into_owned())
    }
}
