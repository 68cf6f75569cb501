//! Wire-format mapping for the rendering API.
//!
//! [`to_wire`] is a pure function from an [`Invoice`] to the JSON object
//! shape the API expects; it borrows from the invoice and never mutates it.
//! The notable transformations: the sender serializes under the `from` key,
//! both dates are formatted with the configured date format (each from its
//! own value), and template overrides flatten into top-level keys. The
//! configuration and the template container itself never appear in the
//! output.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{CustomField, Invoice, LineItem, SubtotalFields};

/// Borrowed request body for the rendering endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct InvoiceRequest<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ship_to: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<&'a str>,
    currency: &'a str,
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_terms: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terms: Option<&'a str>,
    discounts: f64,
    tax: f64,
    shipping: f64,
    amount_paid: f64,
    items: &'a [LineItem],
    custom_fields: &'a [CustomField],
    fields: SubtotalFields,
    #[serde(flatten)]
    template: &'a BTreeMap<String, String>,
}

/// Map an invoice to its wire representation.
pub(crate) fn to_wire(invoice: &Invoice) -> InvoiceRequest<'_> {
    let config = invoice.config();

    InvoiceRequest {
        from: &invoice.from,
        to: &invoice.to,
        ship_to: invoice.ship_to.as_deref(),
        logo: invoice.logo.as_deref(),
        number: invoice.number.as_deref(),
        currency: &invoice.currency,
        date: config.format_date(&invoice.date),
        // Each date field is formatted from its own value.
        due_date: invoice.due_date.as_ref().map(|d| config.format_date(d)),
        payment_terms: invoice.payment_terms.as_deref(),
        notes: invoice.notes.as_deref(),
        terms: invoice.terms.as_deref(),
        discounts: invoice.discounts,
        tax: invoice.tax,
        shipping: invoice.shipping,
        amount_paid: invoice.amount_paid,
        items: invoice.items(),
        custom_fields: invoice.custom_fields(),
        fields: invoice.fields(),
        template: invoice.template(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeZone;
    use serde_json::Value;

    use crate::{ClientConfig, Invoice};

    fn test_invoice() -> Invoice {
        let config = Arc::new(ClientConfig::builder("test-key").build().unwrap());
        Invoice::new(config, "Acme", "Coyote")
    }

    fn to_value(invoice: &Invoice) -> Value {
        invoice.to_json().unwrap()
    }

    #[test]
    fn test_sender_serializes_as_from() {
        let json = to_value(&test_invoice());
        assert_eq!(json["from"], "Acme");
        assert!(json.get("sender").is_none());
        assert_eq!(json["to"], "Coyote");
    }

    #[test]
    fn test_date_uses_configured_format() {
        let mut invoice = test_invoice();
        invoice.date = chrono_tz::Europe::Paris
            .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .unwrap();

        let json = to_value(&invoice);
        assert_eq!(json["date"], "01 Mar 2024");
        assert!(json.get("due_date").is_none());
    }

    #[test]
    fn test_due_date_formatted_from_own_value() {
        let mut invoice = test_invoice();
        let tz = chrono_tz::Europe::Paris;
        invoice.date = tz.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        invoice.due_date = Some(tz.with_ymd_and_hms(2024, 3, 31, 9, 0, 0).unwrap());

        let json = to_value(&invoice);
        assert_eq!(json["date"], "01 Mar 2024");
        assert_eq!(json["due_date"], "31 Mar 2024");
    }

    #[test]
    fn test_items_expand_in_order() {
        let mut invoice = test_invoice();
        invoice.add_item("Anvil", 2.0, 150.0, Some("Drop-forged".to_string()));
        invoice.add_item("Rocket skates", 1.0, 300.0, None);

        let json = to_value(&invoice);
        let items = json["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            serde_json::json!({
                "name": "Anvil",
                "quantity": 2.0,
                "unit_cost": 150.0,
                "description": "Drop-forged"
            })
        );
        assert_eq!(items[1]["name"], "Rocket skates");
    }

    #[test]
    fn test_custom_fields_expand_in_order() {
        let mut invoice = test_invoice();
        invoice.add_custom_field("PO Number", "PO-1234");
        invoice.add_custom_field("VAT ID", "FR123456");

        let json = to_value(&invoice);
        let fields = json["custom_fields"].as_array().unwrap();
        assert_eq!(
            fields[0],
            serde_json::json!({"name": "PO Number", "value": "PO-1234"})
        );
        assert_eq!(
            fields[1],
            serde_json::json!({"name": "VAT ID", "value": "FR123456"})
        );
    }

    #[test]
    fn test_template_flattens_to_top_level() {
        let mut invoice = test_invoice();
        invoice.set_template_text("header", "FACTURE").unwrap();
        invoice.set_template_text("total_title", "Total TTC").unwrap();

        let json = to_value(&invoice);
        assert_eq!(json["header"], "FACTURE");
        assert_eq!(json["total_title"], "Total TTC");
        // The containers themselves never surface.
        assert!(json.get("template").is_none());
        assert!(json.get("config").is_none());
    }

    #[test]
    fn test_scalars_pass_through_by_name() {
        let mut invoice = test_invoice();
        invoice.ship_to = Some("Desert outpost 7".to_string());
        invoice.number = Some("INV-0042".to_string());
        invoice.currency = "EUR".to_string();
        invoice.payment_terms = Some("NET 30".to_string());
        invoice.discounts = 10.0;
        invoice.tax = 20.0;
        invoice.shipping = 5.5;
        invoice.amount_paid = 100.0;

        let json = to_value(&invoice);
        assert_eq!(json["ship_to"], "Desert outpost 7");
        assert_eq!(json["number"], "INV-0042");
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["payment_terms"], "NET 30");
        assert_eq!(json["discounts"], 10.0);
        assert_eq!(json["tax"], 20.0);
        assert_eq!(json["shipping"], 5.5);
        assert_eq!(json["amount_paid"], 100.0);
        assert_eq!(json["fields"]["tax"], "%");
    }

    #[test]
    fn test_unset_optionals_omitted() {
        let json = to_value(&test_invoice());
        for key in ["ship_to", "logo", "number", "payment_terms", "notes", "terms"] {
            assert!(json.get(key).is_none(), "expected '{key}' to be omitted");
        }
    }
}
