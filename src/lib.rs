//! Invoice-Generator API client library.
//!
//! A Rust library for rendering invoices through the Invoice-Generator web
//! API: build an [`Invoice`] in memory, let the library map it to the API's
//! JSON shape, and retrieve the rendered PDF with a single request.
//!
//! # Quick Start
//!
//! ```no_run
//! use invoicegen::{InvoiceClient, SubtotalFields, TaxDisplay};
//!
//! #[tokio::main]
//! async fn main() -> invoicegen::Result<()> {
//!     // Create client from environment variables
//!     let client = InvoiceClient::from_env()?;
//!
//!     // Build an invoice
//!     let mut invoice = client.invoice("Acme Corp", "Wile E. Coyote");
//!     invoice.number = Some("INV-0042".to_string());
//!     invoice.add_item("Anvil", 2.0, 150.0, Some("Drop-forged".to_string()));
//!     invoice.add_custom_field("PO Number", "PO-1234");
//!
//!     // Show the tax line as a flat amount
//!     invoice.tax = 57.0;
//!     invoice.toggle_subtotal(SubtotalFields {
//!         tax: TaxDisplay::Amount,
//!         ..Default::default()
//!     });
//!
//!     // Render and write the PDF
//!     client.download(&invoice, "invoice.pdf").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around three pieces:
//!
//! - [`ClientConfig`] - connection and formatting settings, built once and
//!   shared read-only across invoices
//! - [`Invoice`] and its owned [`LineItem`]/[`CustomField`] collections -
//!   the in-memory billing document and its mutation operations
//! - [`InvoiceClient`] - the HTTP transport: one POST per render, bearer
//!   authentication, and document persistence
//!
//! Serialization is a pure mapping from the invoice to the wire shape; it
//! renames the sender field to `from`, formats each date field from its own
//! value with the configured format and locale, and flattens template label
//! overrides into top-level keys.
//!
//! # Configuration
//!
//! [`InvoiceClient::from_env`] reads configuration from environment
//! variables:
//!
//! - `INVOICE_API_KEY` (required) - Your API key
//! - `INVOICE_API_URL` (optional) - Endpoint (defaults to
//!   `https://invoice-generator.com`)

mod client;
mod config;
mod error;
mod models;
mod wire;

pub mod cli;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::InvoiceClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{InvoiceError, Result};

// Re-export models
pub use models::{
    is_template_param,
    CustomField,
    Invoice,
    LineItem,
    SubtotalFields,
    TaxDisplay,
    TEMPLATE_PARAMS,
};
