//! Server and auth-service configuration parsed from environment variables.

use crate::auth::types::AuthError;

pub const DEFAULT_AUTH_SERVICE_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_PORT: u16 = 3000;

/// Where the auth service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthServiceConfig {
    /// Scheme + host + optional prefix, without trailing `/`.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub auth: AuthServiceConfig,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `AUTH_SERVICE_BASE_URL`: default `http://localhost:4000`
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 10
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 5
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns an error if `AUTH_SERVICE_BASE_URL` is not an http(s) URL.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if `AUTH_SERVICE_BASE_URL` is not an http(s) URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let base_url = parse_base_url(lookup("AUTH_SERVICE_BASE_URL").as_deref())?;
        let auth = AuthServiceConfig {
            base_url,
            request_timeout_secs: parse_or(
                lookup("AUTH_REQUEST_TIMEOUT_SECS").as_deref(),
                DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
            ),
            connect_timeout_secs: parse_or(
                lookup("AUTH_CONNECT_TIMEOUT_SECS").as_deref(),
                DEFAULT_AUTH_CONNECT_TIMEOUT_SECS,
            ),
        };
        let port = parse_or(lookup("PORT").as_deref(), DEFAULT_PORT);

        Ok(Self { port, auth })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_base_url(raw: Option<&str>) -> Result<String, AuthError> {
    let url = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_AUTH_SERVICE_BASE_URL)
        .trim_end_matches('/');

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AuthError::ConfigParse(format!(
            "AUTH_SERVICE_BASE_URL must start with http:// or https:// (got '{url}')"
        )));
    }

    Ok(url.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
