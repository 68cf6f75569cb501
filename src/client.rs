//! Invoice rendering API client.
//!
//! Low-level HTTP client that handles authentication and the single
//! rendering request. Invoices are built via the model types and handed to
//! [`InvoiceClient::render`] or [`InvoiceClient::download`].

use std::path::Path;
use std::sync::Arc;

use reqwest::{Client, Response};

use crate::config::ClientConfig;
use crate::error::{InvoiceError, Result};
use crate::models::Invoice;
use crate::wire;

const USER_AGENT: &str = concat!("invoicegen/", env!("CARGO_PKG_VERSION"));

/// Client for the invoice rendering API.
///
/// Wraps a pooled HTTP client and the shared [`ClientConfig`]. This struct
/// is cheaply cloneable; clones reference the same underlying connection
/// pool and configuration.
///
/// # Example
///
/// ```no_run
/// use invoicegen::InvoiceClient;
///
/// # async fn example() -> invoicegen::Result<()> {
/// // Create from environment variables
/// let client = InvoiceClient::from_env()?;
///
/// let mut invoice = client.invoice("Acme Corp", "Wile E. Coyote");
/// invoice.add_item("Anvil", 2.0, 150.0, None);
///
/// client.download(&invoice, "invoice.pdf").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct InvoiceClient {
    http: Client,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for InvoiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvoiceClient")
            .field("endpoint_url", &self.config.endpoint_url().as_str())
            .finish_non_exhaustive()
    }
}

impl InvoiceClient {
    /// Create a client from environment variables.
    ///
    /// Uses `INVOICE_API_KEY` for authentication and optionally
    /// `INVOICE_API_URL` for the endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `INVOICE_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(Arc::new(ClientConfig::from_env()?))
    }

    /// Create a new client with the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: Arc<ClientConfig>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout())
            .build()
            .map_err(InvoiceError::HttpError)?;

        Ok(Self { http, config })
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create an invoice sharing this client's configuration.
    pub fn invoice(&self, from: impl Into<String>, to: impl Into<String>) -> Invoice {
        Invoice::new(self.config.clone(), from, to)
    }

    /// Render the invoice and return the document bytes.
    ///
    /// Issues one POST to the configured endpoint with the invoice's wire
    /// JSON, `Authorization: Bearer` set from the API key, and
    /// `Accept-Language` set when a locale is configured.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::ApiError`] for any non-success status, with
    /// the status code and the message extracted from the response body.
    /// Transport failures surface as [`InvoiceError::HttpError`].
    #[tracing::instrument(skip(self, invoice))]
    pub async fn render(&self, invoice: &Invoice) -> Result<Vec<u8>> {
        let mut request = self
            .http
            .post(self.config.endpoint_url().clone())
            .bearer_auth(self.config.api_key())
            .json(&wire::to_wire(invoice));

        if let Some(locale) = self.config.locale() {
            request = request.header(reqwest::header::ACCEPT_LANGUAGE, locale);
        }

        let response = request.send().await.map_err(InvoiceError::HttpError)?;
        let response = Self::check_response(response).await?;

        let body = response.bytes().await.map_err(InvoiceError::HttpError)?;
        Ok(body.to_vec())
    }

    /// Render the invoice and write the document to `path`.
    ///
    /// The full response body is buffered before the file is touched, so a
    /// failed request never leaves a partial file behind. An existing file
    /// at `path` is overwritten.
    ///
    /// # Errors
    ///
    /// Propagates [`render`](Self::render) errors unchanged; file system
    /// failures surface as [`InvoiceError::IoError`].
    #[tracing::instrument(skip(self, invoice, path))]
    pub async fn download(&self, invoice: &Invoice, path: impl AsRef<Path>) -> Result<()> {
        let document = self.render(invoice).await?;
        tokio::fs::write(path, document).await?;
        Ok(())
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(InvoiceError::ApiError {
            status_code: status.as_u16(),
            message,
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // Try to parse as JSON and extract message field
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<ClientConfig> {
        Arc::new(ClientConfig::builder("test-key").build().unwrap())
    }

    #[test]
    fn test_client_debug() {
        let client = InvoiceClient::new(test_config()).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("InvoiceClient"));
        assert!(debug.contains("endpoint_url"));
        // API key should not be in debug output
        assert!(!debug.contains("test-key"));
    }

    #[test]
    fn test_invoice_factory_shares_config() {
        let client = InvoiceClient::new(test_config()).unwrap();
        let invoice = client.invoice("Acme", "Coyote");
        assert_eq!(
            invoice.config().endpoint_url(),
            client.config().endpoint_url()
        );
        assert_eq!(invoice.from, "Acme");
        assert_eq!(invoice.to, "Coyote");
    }
}
