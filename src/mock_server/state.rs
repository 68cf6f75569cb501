//! Mock server state management.
//!
//! Holds the configuration and request log for the mock rendering server.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Default document bytes returned on success.
const DEFAULT_DOCUMENT: &[u8] = b"%PDF-1.4\n% mock invoice document\n";

/// One rendering request the mock server accepted.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// The `Authorization` header, verbatim.
    pub authorization: Option<String>,

    /// The `Accept-Language` header, verbatim.
    pub accept_language: Option<String>,

    /// The parsed JSON request body.
    pub body: serde_json::Value,
}

/// Shared state for the mock server.
///
/// Wrapped in `Arc<RwLock<_>>` for concurrent access; tests can inspect the
/// request log or reconfigure failures mid-test.
#[derive(Debug)]
pub struct MockState {
    /// Every request accepted so far, in arrival order.
    pub requests: Vec<RecordedRequest>,

    /// Optional bearer token. If set, requests must carry it.
    pub required_token: Option<String>,

    /// Optional forced failure: `(status, body)` returned for every request.
    pub forced_failure: Option<(u16, String)>,

    /// Document bytes returned on success.
    pub document: Vec<u8>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
            required_token: None,
            forced_failure: None,
            document: DEFAULT_DOCUMENT.to_vec(),
        }
    }
}

impl MockState {
    /// Create a new default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Require a bearer token on every request.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Fail every request with the given status and body.
    pub fn with_forced_failure(mut self, status: u16, body: &str) -> Self {
        self.forced_failure = Some((status, body.to_string()));
        self
    }

    /// Override the document bytes returned on success.
    pub fn with_document(mut self, document: Vec<u8>) -> Self {
        self.document = document;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_serves_pdf_stub() {
        let state = MockState::new();
        assert!(state.document.starts_with(b"%PDF"));
        assert!(state.requests.is_empty());
        assert!(state.required_token.is_none());
        assert!(state.forced_failure.is_none());
    }

    #[test]
    fn test_builders() {
        let state = MockState::new()
            .with_required_token("secret")
            .with_forced_failure(503, "down")
            .with_document(b"custom".to_vec());

        assert_eq!(state.required_token.as_deref(), Some("secret"));
        assert_eq!(state.forced_failure, Some((503, "down".to_string())));
        assert_eq!(state.document, b"custom");
    }
}
