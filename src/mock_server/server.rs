//! Mock rendering API server.
//!
//! Provides an axum-based HTTP server that simulates the rendering endpoint.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::handlers;
use super::state::{MockState, RecordedRequest};

/// A mock rendering API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic endpoint implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default state.
    ///
    /// The server listens on a random available port and returns
    /// immediately. Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL as the `endpoint_url` of a test `ClientConfig`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows reconfiguring the mock mid-test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Snapshot of the requests accepted so far, in arrival order.
    pub async fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.state.read().await.requests.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the axum router.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            .route("/", post(handlers::render_invoice))
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
