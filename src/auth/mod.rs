//! Auth — session cookie forwarding to the external auth service.
//!
//! DESIGN
//! ======
//! This server owns no sessions. The auth service at
//! `AUTH_SERVICE_BASE_URL` does; pages ask it `GET /auth/status` with the
//! browser's `_place_server_key` cookie and render whatever it answers.
//! The fetch capability (`AuthStatusFetch`) and cookie store
//! (`CookieSource`) are traits so the loader can be driven without a
//! network or an HTTP request.

pub mod client;
pub mod cookies;
pub mod loader;
pub mod types;

pub use client::{AuthStatusClient, AuthStatusFetch};
pub use loader::PageAuthLoader;
pub use types::LoadResult;
