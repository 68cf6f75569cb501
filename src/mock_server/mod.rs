//! Mock rendering API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the invoice
//! rendering endpoint for integration and end-to-end testing. Unlike
//! wiremock which mocks at the HTTP level per-test, this server maintains
//! state across requests: it records every rendering request it accepts,
//! can require a bearer token, and can be forced to fail.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use invoicegen::mock_server::MockServer;
//! use invoicegen::{ClientConfig, InvoiceClient};
//!
//! #[tokio::test]
//! async fn test_render() {
//!     let server = MockServer::start().await;
//!     let config = Arc::new(
//!         ClientConfig::builder("test-key")
//!             .endpoint_url(server.url())
//!             .build()
//!             .unwrap(),
//!     );
//!     let client = InvoiceClient::new(config).unwrap();
//!
//!     let invoice = client.invoice("Acme", "Coyote");
//!     let document = client.render(&invoice).await.unwrap();
//!     assert!(document.starts_with(b"%PDF"));
//!
//!     server.shutdown().await;
//! }
//! ```

mod handlers;
mod server;
mod state;

pub use server::MockServer;
pub use state::{MockState, RecordedRequest};
