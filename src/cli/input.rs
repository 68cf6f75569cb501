//! Invoice definition files.
//!
//! The CLI reads invoices from a JSON file carrying the same field names as
//! the wire format, with ISO `YYYY-MM-DD` dates. Template overrides live
//! under a `template` key and are validated against the allow-list when the
//! file is turned into an [`Invoice`].

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{CustomField, Invoice, LineItem, SubtotalFields};

/// A deserialized invoice definition file.
///
/// ```json
/// {
///   "from": "Acme Corp",
///   "to": "Wile E. Coyote",
///   "number": "INV-0042",
///   "date": "2024-03-01",
///   "due_date": "2024-03-31",
///   "items": [
///     {"name": "Anvil", "quantity": 2, "unit_cost": 150.0}
///   ],
///   "template": {"header": "FACTURE"}
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceFile {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub ship_to: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub terms: Option<String>,
    #[serde(default)]
    pub discounts: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub shipping: f64,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub fields: Option<SubtotalFields>,
    #[serde(default)]
    pub template: BTreeMap<String, String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl InvoiceFile {
    /// Load a definition from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Build an [`Invoice`] from this definition and the shared config.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::InvalidTemplateParam`](crate::InvoiceError)
    /// if the `template` map contains an unrecognized label name.
    pub fn into_invoice(self, config: Arc<ClientConfig>) -> Result<Invoice> {
        let timezone = config.timezone();
        let mut invoice = Invoice::new(config, self.from, self.to);

        invoice.ship_to = self.ship_to;
        invoice.logo = self.logo;
        invoice.number = self.number;
        invoice.currency = self.currency;
        invoice.payment_terms = self.payment_terms;
        invoice.notes = self.notes;
        invoice.terms = self.terms;
        invoice.discounts = self.discounts;
        invoice.tax = self.tax;
        invoice.shipping = self.shipping;
        invoice.amount_paid = self.amount_paid;

        if let Some(date) = self.date {
            invoice.date = at_midnight(date, timezone);
        }
        invoice.due_date = self.due_date.map(|d| at_midnight(d, timezone));

        for item in self.items {
            invoice.add_item(item.name, item.quantity, item.unit_cost, item.description);
        }
        for field in self.custom_fields {
            invoice.add_custom_field(field.name, field.value);
        }
        for (parameter, value) in self.template {
            invoice.set_template_text(&parameter, value)?;
        }
        if let Some(fields) = self.fields {
            invoice.toggle_subtotal(fields);
        }

        Ok(invoice)
    }
}

/// Midnight of `date` in `tz`. Falls back to the UTC reading when a DST
/// transition makes local midnight nonexistent.
fn at_midnight(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaxDisplay;

    fn test_config() -> Arc<ClientConfig> {
        Arc::new(ClientConfig::builder("test-key").build().unwrap())
    }

    #[test]
    fn test_minimal_file() {
        let file: InvoiceFile =
            serde_json::from_str(r#"{"from": "Acme", "to": "Coyote"}"#).unwrap();
        let invoice = file.into_invoice(test_config()).unwrap();

        assert_eq!(invoice.from, "Acme");
        assert_eq!(invoice.currency, "USD");
        assert!(invoice.items().is_empty());
    }

    #[test]
    fn test_full_file() {
        let file: InvoiceFile = serde_json::from_str(
            r#"{
                "from": "Acme",
                "to": "Coyote",
                "number": "INV-7",
                "currency": "EUR",
                "date": "2024-03-01",
                "due_date": "2024-03-31",
                "items": [
                    {"name": "Anvil", "quantity": 2, "unit_cost": 150.0},
                    {"name": "Skates", "quantity": 1, "unit_cost": 300.0, "description": "Rocket"}
                ],
                "custom_fields": [{"name": "PO", "value": "PO-1"}],
                "fields": {"tax": true, "discounts": true},
                "template": {"header": "FACTURE"}
            }"#,
        )
        .unwrap();
        let invoice = file.into_invoice(test_config()).unwrap();

        assert_eq!(invoice.number.as_deref(), Some("INV-7"));
        assert_eq!(invoice.items().len(), 2);
        assert_eq!(invoice.items()[1].description.as_deref(), Some("Rocket"));
        assert_eq!(invoice.custom_fields().len(), 1);
        assert_eq!(invoice.fields().tax, TaxDisplay::Amount);
        assert!(invoice.fields().discounts);
        assert!(!invoice.fields().shipping);
        assert_eq!(invoice.template()["header"], "FACTURE");

        let json = invoice.to_json().unwrap();
        assert_eq!(json["date"], "01 Mar 2024");
        assert_eq!(json["due_date"], "31 Mar 2024");
    }

    #[test]
    fn test_unknown_template_param_rejected() {
        let file: InvoiceFile = serde_json::from_str(
            r#"{"from": "Acme", "to": "Coyote", "template": {"footer": "x"}}"#,
        )
        .unwrap();
        assert!(file.into_invoice(test_config()).is_err());
    }
}
