//! Auth status types — upstream response shape, page data, and errors.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while asking the authentication service for status.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The session cookie cannot be carried in an HTTP header.
    #[error("session cookie is not a valid header value")]
    InvalidSessionCookie,

    /// The request never produced a response (DNS, refused, timeout, reset).
    #[error("auth service unreachable: {0}")]
    Unreachable(String),

    /// The auth service answered with a status outside 2xx.
    #[error("auth service returned status {status}")]
    NonSuccess { status: u16 },

    /// The success body was not JSON or did not have the expected shape.
    #[error("auth status body malformed: {0}")]
    MalformedBody(String),
}

impl AuthError {
    /// Stable code attached to log lines.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::InvalidSessionCookie => "E_INVALID_SESSION_COOKIE",
            Self::Unreachable(_) => "E_UNREACHABLE",
            Self::NonSuccess { .. } => "E_NON_SUCCESS",
            Self::MalformedBody(_) => "E_MALFORMED_BODY",
        }
    }
}

// =============================================================================
// UPSTREAM RESPONSE
// =============================================================================

/// User identifier as issued by the auth service: a string or any JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Number(serde_json::Number),
}

impl UserId {
    /// `""` and `0` carry no identity.
    fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => is_zero(n),
        }
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

#[allow(clippy::float_cmp)]
fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().is_some_and(|f| f == 0.0)
}

/// JSON values that count as "no value": `null`, `false`, `0` and `""`.
fn is_falsy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => is_zero(n),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => false,
    }
}

/// Body of a successful `GET /auth/status`. Every field is optional; unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthStatusResponse {
    #[serde(default)]
    pub authenticated: Option<bool>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub user_info: Option<serde_json::Value>,
}

/// Result of the HTTP step: the parsed status, or why there is none.
pub type StatusOutcome = Result<AuthStatusResponse, AuthError>;

// =============================================================================
// PAGE DATA
// =============================================================================

/// Authentication data handed to the page renderer.
///
/// Always carries all three fields; absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResult {
    pub is_authenticated: bool,
    pub user_id: Option<UserId>,
    pub user_info: Option<serde_json::Value>,
}

impl LoadResult {
    /// The fallback `{false, null, null}` triple.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { is_authenticated: false, user_id: None, user_info: None }
    }
}

impl Default for LoadResult {
    fn default() -> Self {
        Self::unauthenticated()
    }
}

impl From<AuthStatusResponse> for LoadResult {
    fn from(status: AuthStatusResponse) -> Self {
        Self {
            is_authenticated: status.authenticated.unwrap_or(false),
            user_id: status.user_id.filter(|id| !id.is_blank()),
            user_info: status.user_info.filter(|info| !is_falsy(info)),
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
