mod auth;
mod config;
mod routes;
mod state;
#[cfg(test)]
mod test_helpers;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let client = auth::AuthStatusClient::new(&config.auth).expect("auth client init failed");
    tracing::info!(status_url = client.status_url(), "auth status endpoint configured");

    let state = state::AppState::new(Arc::new(client));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "place-web listening");
    axum::serve(listener, app).await.expect("server failed");
}
