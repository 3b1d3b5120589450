//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds only the page auth loader; no per-request state survives a
//! request.

use std::sync::Arc;

use crate::auth::{AuthStatusFetch, PageAuthLoader};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<PageAuthLoader>,
}

impl AppState {
    #[must_use]
    pub fn new(fetcher: Arc<dyn AuthStatusFetch>) -> Self {
        Self { loader: Arc::new(PageAuthLoader::new(fetcher)) }
    }
}
