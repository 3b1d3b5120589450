//! Read-only cookie access for the loader.

use std::collections::HashMap;

use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Name of the session cookie set by the auth service.
pub const SESSION_COOKIE_NAME: &str = "_place_server_key";

/// Lookup of request cookies by name.
pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<&str>;
}

impl CookieSource for CookieJar {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.get(name).map(Cookie::value)
    }
}

impl CookieSource for HashMap<String, String> {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// The session cookie value, if present and non-empty.
pub fn session_cookie<C: CookieSource + ?Sized>(cookies: &C) -> Option<&str> {
    cookies
        .cookie(SESSION_COOKIE_NAME)
        .filter(|value| !value.is_empty())
}

/// `Cookie` header value that forwards the session to the auth service.
#[must_use]
pub fn session_cookie_header(value: &str) -> String {
    format!("{SESSION_COOKIE_NAME}={value}")
}

#[cfg(test)]
#[path = "cookies_test.rs"]
mod tests;
