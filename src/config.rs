//! Client configuration shared across invoices.
//!
//! A [`ClientConfig`] carries the connection and formatting settings for the
//! rendering API: the API key, endpoint URL, date format, optional locale,
//! timezone, and request timeout. Build one with [`ClientConfig::builder`]
//! and share it between invoices and the client via `Arc`.

use std::env;
use std::time::Duration;

use chrono::{DateTime, Locale};
use chrono_tz::Tz;
use url::Url;

use crate::error::{InvoiceError, Result};

const DEFAULT_API_URL: &str = "https://invoice-generator.com";
const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";
const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Paris;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Connection and formatting settings for the rendering API.
///
/// Constructed once and shared read-only by [`Invoice`](crate::Invoice)
/// instances and the [`InvoiceClient`](crate::InvoiceClient).
///
/// # Example
///
/// ```no_run
/// use invoicegen::ClientConfig;
///
/// # fn example() -> invoicegen::Result<()> {
/// let config = ClientConfig::builder("your-api-key")
///     .locale("fr_FR")
///     .timezone("Europe/Paris")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    endpoint_url: Url,
    date_format: String,
    locale: Option<String>,
    chrono_locale: Option<Locale>,
    timezone: Tz,
    timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint_url", &self.endpoint_url.as_str())
            .field("date_format", &self.date_format)
            .field("locale", &self.locale)
            .field("timezone", &self.timezone)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Start building a configuration with the given API key.
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            api_key: api_key.into(),
            endpoint_url: DEFAULT_API_URL.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            locale: None,
            timezone: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// Uses `INVOICE_API_KEY` for authentication and optionally
    /// `INVOICE_API_URL` for the endpoint (defaults to
    /// `https://invoice-generator.com`). All other settings take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `INVOICE_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("INVOICE_API_KEY").map_err(|_| {
            InvoiceError::ConfigMissing("INVOICE_API_KEY environment variable not set".to_string())
        })?;

        let mut builder = Self::builder(api_key);
        if let Ok(url) = env::var("INVOICE_API_URL") {
            builder = builder.endpoint_url(url);
        }
        builder.build()
    }

    /// The API key used for bearer authentication.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The rendering endpoint.
    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint_url
    }

    /// strftime-style format applied to `date` and `due_date`.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Locale identifier sent as `Accept-Language` and used for date
    /// formatting, if configured.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Timezone in which invoice dates default to "now".
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Request timeout for the rendering call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Format a timestamp with the configured date format and locale.
    ///
    /// The locale is passed explicitly into the formatting call; no
    /// process-global locale state is touched.
    pub(crate) fn format_date(&self, date: &DateTime<Tz>) -> String {
        match self.chrono_locale {
            Some(locale) => date.format_localized(&self.date_format, locale).to_string(),
            None => date.format(&self.date_format).to_string(),
        }
    }
}

/// Builder for [`ClientConfig`].
#[derive(Clone)]
pub struct ClientConfigBuilder {
    api_key: String,
    endpoint_url: String,
    date_format: String,
    locale: Option<String>,
    timezone: Option<String>,
    timeout: Duration,
}

impl ClientConfigBuilder {
    /// Override the rendering endpoint URL.
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = url.into();
        self
    }

    /// Set the strftime-style date format (default `%d %b %Y`).
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the locale identifier (e.g. `fr_FR`).
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the timezone by IANA name (e.g. `Europe/Paris`).
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Set the request timeout (default 300 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the settings and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty, the endpoint URL does not
    /// parse, or the timezone/locale names are not recognized.
    pub fn build(self) -> Result<ClientConfig> {
        if self.api_key.is_empty() {
            return Err(InvoiceError::ConfigMissing(
                "API key must not be empty".to_string(),
            ));
        }

        let endpoint_url = Url::parse(&self.endpoint_url)?;

        let timezone = match self.timezone {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| InvoiceError::InvalidTimezone(name))?,
            None => DEFAULT_TIMEZONE,
        };

        // Resolve the locale once so formatting never has to re-parse it.
        let chrono_locale = match self.locale.as_deref() {
            Some(tag) => Some(
                Locale::try_from(tag).map_err(|_| InvoiceError::InvalidLocale(tag.to_string()))?,
            ),
            None => None,
        };

        Ok(ClientConfig {
            api_key: self.api_key,
            endpoint_url,
            date_format: self.date_format,
            locale: self.locale,
            chrono_locale,
            timezone,
            timeout: self.timeout,
        })
    }
}
