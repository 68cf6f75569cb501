//! Line item model.

use serde::{Deserialize, Serialize};

/// One billable row on an invoice.
///
/// Items are appended via [`Invoice::add_item`](crate::Invoice::add_item)
/// and immutable thereafter. Quantity and unit cost are deliberately
/// unvalidated; the rendering API accepts negative adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name shown on the invoice.
    pub name: String,

    /// Quantity, which may be fractional (e.g. hours).
    pub quantity: f64,

    /// Cost per unit in the invoice currency.
    pub unit_cost: f64,

    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit_cost: f64,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_cost,
            description,
        }
    }

    /// Extended amount for this row (quantity times unit cost).
    pub fn amount(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}
