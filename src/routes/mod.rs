//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are rendered on the server with auth data resolved per request.
//! `/__data.json` serves the same data for client-side navigation.

pub mod page;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::home))
        .route("/__data.json", get(page::page_data))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
