//! Shared fixtures for tests: a stub auth service and log capture.

use std::io;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::get;
use tokio::net::TcpListener;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::AuthServiceConfig;

// =============================================================================
// STUB AUTH SERVICE
// =============================================================================

/// Local HTTP server standing in for the auth service. Answers every
/// `GET /auth/status` with a fixed status and body and records request headers.
pub struct StubAuthService {
    pub base_url: String,
    requests: Arc<Mutex<Vec<HeaderMap>>>,
}

impl StubAuthService {
    pub async fn spawn(status: StatusCode, body: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let app = Router::new().route(
            "/auth/status",
            get(move |headers: HeaderMap| {
                let recorded = Arc::clone(&recorded);
                async move {
                    recorded.lock().expect("stub mutex should lock").push(headers);
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub should bind");
        let addr = listener.local_addr().expect("stub should have an address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { base_url: format!("http://{addr}"), requests }
    }

    /// Headers of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<HeaderMap> {
        self.requests.lock().expect("stub mutex should lock").clone()
    }

    pub fn config(&self) -> AuthServiceConfig {
        test_config(&self.base_url)
    }
}

/// Base URL of a port nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("probe should bind");
    let addr = listener.local_addr().expect("probe should have an address");
    drop(listener);
    format!("http://{addr}")
}

pub fn test_config(base_url: &str) -> AuthServiceConfig {
    AuthServiceConfig { base_url: base_url.to_owned(), request_timeout_secs: 5, connect_timeout_secs: 2 }
}

// =============================================================================
// LOG CAPTURE
// =============================================================================

/// In-memory log sink for asserting on emitted diagnostics.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log mutex should lock");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log mutex should lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Route this thread's tracing output into a [`LogCapture`] until the guard drops.
/// Only sees events from the current thread, so use a current-thread runtime.
pub fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
