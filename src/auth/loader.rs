//! Page auth loader — turns a request's session cookie into page data.
//!
//! DESIGN
//! ======
//! The loader is the terminal boundary for auth failures: the HTTP step
//! returns a `StatusOutcome` and every failure is folded into the
//! unauthenticated `LoadResult`, so pages always render. Rejections
//! (non-2xx) are expected for anonymous visitors and log at debug;
//! transport and parse failures log at error.

use std::sync::Arc;

use tracing::{debug, error};

use super::client::AuthStatusFetch;
use super::cookies::{CookieSource, session_cookie};
use super::types::{AuthError, LoadResult};

pub struct PageAuthLoader {
    fetcher: Arc<dyn AuthStatusFetch>,
}

impl PageAuthLoader {
    #[must_use]
    pub fn new(fetcher: Arc<dyn AuthStatusFetch>) -> Self {
        Self { fetcher }
    }

    /// Resolve the auth status for one page request. Never fails.
    pub async fn load<C>(&self, cookies: &C) -> LoadResult
    where
        C: CookieSource + Sync + ?Sized,
    {
        let session = session_cookie(cookies);

        match self.fetcher.fetch_status(session).await {
            Ok(status) => LoadResult::from(status),
            Err(AuthError::NonSuccess { status }) => {
                debug!(
                    status,
                    has_session = session.is_some(),
                    "auth status not ok; rendering unauthenticated"
                );
                LoadResult::unauthenticated()
            }
            Err(e) => {
                error!(error = %e, code = e.error_code(), "auth status check failed");
                LoadResult::unauthenticated()
            }
        }
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
