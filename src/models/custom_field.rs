//! Custom field model.

use serde::{Deserialize, Serialize};

/// A caller-defined name/value pair shown on the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Field label.
    pub name: String,

    /// Field value.
    pub value: String,
}

impl CustomField {
    /// Create a new custom field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
