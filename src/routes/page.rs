//! Page routes — home page render and its data endpoint.
//!
//! Templates are minijinja with HTML auto-escaping (selected by the
//! `.html` template name); page data is embedded through `tojson`, which
//! escapes `<`, `>` and `&` so the payload cannot close its `<script>`.

use std::sync::LazyLock;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use minijinja::{Environment, context};

use crate::auth::LoadResult;
use crate::state::AppState;

const HOME_TEMPLATE_NAME: &str = "home.html";
const HOME_TEMPLATE: &str = include_str!("../../templates/home.html");

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(Environment::new);

/// `GET /` — render the home page with auth data.
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Response {
    let data = state.loader.load(&jar).await;
    match render_home(&data) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, template = HOME_TEMPLATE_NAME, "page render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /__data.json` — auth data for client-side navigation.
pub async fn page_data(State(state): State<AppState>, jar: CookieJar) -> Json<LoadResult> {
    Json(state.loader.load(&jar).await)
}

// =============================================================================
// RENDERING
// =============================================================================

pub(crate) fn render_home(data: &LoadResult) -> Result<String, minijinja::Error> {
    TEMPLATES.render_named_str(
        HOME_TEMPLATE_NAME,
        HOME_TEMPLATE,
        context! { status => status_line(data), data => data },
    )
}

pub(crate) fn status_line(data: &LoadResult) -> String {
    if !data.is_authenticated {
        return "Not signed in".to_owned();
    }

    let name = data
        .user_info
        .as_ref()
        .and_then(|info| info.get("name"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
        .or_else(|| data.user_id.as_ref().map(ToString::to_string));

    match name {
        Some(name) => format!("Signed in as {name}"),
        None => "Signed in".to_owned(),
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
