//! Invoice aggregate and its mutation operations.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::config::ClientConfig;
use crate::error::{InvoiceError, Result};
use crate::models::template::is_template_param;
use crate::models::{CustomField, LineItem, SubtotalFields};
use crate::wire;

/// One billing document to be rendered remotely.
///
/// An invoice owns its line items and custom fields by value, in insertion
/// order, and shares a read-only [`ClientConfig`]. Scalar fields are public
/// and directly assignable; items, custom fields, subtotal toggles, and
/// template overrides are mutated through the dedicated operations so their
/// invariants hold.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use invoicegen::{ClientConfig, Invoice};
///
/// # fn example() -> invoicegen::Result<()> {
/// let config = Arc::new(ClientConfig::builder("your-api-key").build()?);
///
/// let mut invoice = Invoice::new(config, "Acme Corp", "Wile E. Coyote");
/// invoice.number = Some("INV-0042".to_string());
/// invoice.add_item("Anvil", 2.0, 150.0, Some("Drop-forged".to_string()));
/// invoice.add_custom_field("PO Number", "PO-1234");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Invoice {
    config: Arc<ClientConfig>,

    /// Invoice sender (serialized as `from`).
    pub from: String,

    /// Invoice recipient.
    pub to: String,

    /// Shipping address, when it differs from the recipient.
    pub ship_to: Option<String>,

    /// Logo URL shown in the invoice header.
    pub logo: Option<String>,

    /// Invoice number.
    pub number: Option<String>,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Invoice date. Defaults to "now" in the configured timezone.
    pub date: DateTime<Tz>,

    /// Payment due date.
    pub due_date: Option<DateTime<Tz>>,

    /// Payment terms text (e.g. "NET 30").
    pub payment_terms: Option<String>,

    /// Notes shown below the item table.
    pub notes: Option<String>,

    /// Terms and conditions text.
    pub terms: Option<String>,

    /// Discount adjustment.
    pub discounts: f64,

    /// Tax adjustment; interpreted per the `tax` subtotal toggle.
    pub tax: f64,

    /// Shipping adjustment.
    pub shipping: f64,

    /// Amount already paid.
    pub amount_paid: f64,

    items: Vec<LineItem>,
    custom_fields: Vec<CustomField>,
    fields: SubtotalFields,
    template: BTreeMap<String, String>,
}

impl Invoice {
    /// Create an invoice from the required sender, recipient, and shared
    /// configuration.
    ///
    /// Currency defaults to USD, the date to the current time in the
    /// configured timezone, and the subtotal toggles to
    /// [`SubtotalFields::default`].
    pub fn new(
        config: Arc<ClientConfig>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let date = Utc::now().with_timezone(&config.timezone());
        Self {
            config,
            from: from.into(),
            to: to.into(),
            ship_to: None,
            logo: None,
            number: None,
            currency: "USD".to_string(),
            date,
            due_date: None,
            payment_terms: None,
            notes: None,
            terms: None,
            discounts: 0.0,
            tax: 0.0,
            shipping: 0.0,
            amount_paid: 0.0,
            items: Vec::new(),
            custom_fields: Vec::new(),
            fields: SubtotalFields::default(),
            template: BTreeMap::new(),
        }
    }

    /// Append a line item.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        quantity: f64,
        unit_cost: f64,
        description: Option<String>,
    ) {
        self.items
            .push(LineItem::new(name, quantity, unit_cost, description));
    }

    /// Append a custom field.
    pub fn add_custom_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.custom_fields.push(CustomField::new(name, value));
    }

    /// Override one of the renderer's template labels.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::InvalidTemplateParam`] for names outside
    /// [`TEMPLATE_PARAMS`](crate::TEMPLATE_PARAMS), leaving the existing
    /// overrides untouched.
    pub fn set_template_text(&mut self, parameter: &str, value: impl Into<String>) -> Result<()> {
        if !is_template_param(parameter) {
            return Err(InvoiceError::InvalidTemplateParam(parameter.to_string()));
        }
        self.template.insert(parameter.to_string(), value.into());
        Ok(())
    }

    /// Replace the subtotal display toggles wholesale.
    ///
    /// This is a full replacement, not a merge: any field left at its
    /// [`Default`] in `fields` resets, regardless of its previous value.
    pub fn toggle_subtotal(&mut self, fields: SubtotalFields) {
        self.fields = fields;
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The custom fields, in insertion order.
    pub fn custom_fields(&self) -> &[CustomField] {
        &self.custom_fields
    }

    /// The current subtotal display toggles.
    pub fn fields(&self) -> SubtotalFields {
        self.fields
    }

    /// The template label overrides.
    pub fn template(&self) -> &BTreeMap<String, String> {
        &self.template
    }

    /// The shared client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sum of the extended item amounts, before adjustments.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::amount).sum()
    }

    /// Serialize to the wire JSON object the rendering API expects.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(wire::to_wire(self))?)
    }
}
