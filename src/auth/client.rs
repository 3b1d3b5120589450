//! HTTP client for the auth service's status endpoint.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderValue};

use super::cookies::session_cookie_header;
use super::types::{AuthError, StatusOutcome};
use crate::config::AuthServiceConfig;

/// Path of the status endpoint, relative to the auth service base URL.
pub const AUTH_STATUS_PATH: &str = "/auth/status";

/// Capability to ask the auth service who owns a session.
///
/// `session` is the raw session cookie value, `None` when the request
/// carried no session.
#[async_trait::async_trait]
pub trait AuthStatusFetch: Send + Sync {
    async fn fetch_status(&self, session: Option<&str>) -> StatusOutcome;
}

/// reqwest-backed [`AuthStatusFetch`]. Built once at startup and shared.
pub struct AuthStatusClient {
    http: reqwest::Client,
    status_url: String,
}

impl AuthStatusClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AuthServiceConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        let status_url = format!("{}{AUTH_STATUS_PATH}", config.base_url);
        Ok(Self { http, status_url })
    }

    #[must_use]
    pub fn status_url(&self) -> &str {
        &self.status_url
    }
}

#[async_trait::async_trait]
impl AuthStatusFetch for AuthStatusClient {
    async fn fetch_status(&self, session: Option<&str>) -> StatusOutcome {
        let mut request = self
            .http
            .get(&self.status_url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Explicit header only when there is a session to forward.
        if let Some(value) = session {
            let cookie = HeaderValue::from_str(&session_cookie_header(value))
                .map_err(|_| AuthError::InvalidSessionCookie)?;
            request = request.header(COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::NonSuccess { status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| AuthError::MalformedBody(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
