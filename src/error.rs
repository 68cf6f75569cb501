//! Error types for invoice rendering operations.

use thiserror::Error;

/// Errors that can occur while building or rendering an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Configuration is missing or incomplete.
    #[error("invoice configuration required: {0}")]
    ConfigMissing(String),

    /// Unrecognized template parameter name.
    #[error("unknown template parameter '{0}'")]
    InvalidTemplateParam(String),

    /// Timezone name not found in the tz database.
    #[error("invalid timezone '{0}'")]
    InvalidTimezone(String),

    /// Locale identifier not recognized.
    #[error("invalid locale '{0}'")]
    InvalidLocale(String),

    /// The rendering API rejected the request.
    #[error("invoice API error (HTTP {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("failed to serialize invoice: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Failed to persist the rendered document.
    #[error("failed to write document: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for invoice operations.
pub type Result<T> = core::result::Result<T, InvoiceError>;
