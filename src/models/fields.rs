//! Subtotal display toggles.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// How the tax line is displayed in the subtotal block.
///
/// The renderer accepts a mixed-type value here: the string `"%"` for a
/// percentage tax line, or boolean `true` for a flat amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaxDisplay {
    /// Tax is a percentage of the subtotal (wire value `"%"`).
    #[default]
    Percent,
    /// Tax is a flat amount (wire value `true`).
    Amount,
}

impl Serialize for TaxDisplay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TaxDisplay::Percent => serializer.serialize_str("%"),
            TaxDisplay::Amount => serializer.serialize_bool(true),
        }
    }
}

impl<'de> Deserialize<'de> for TaxDisplay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TaxDisplayVisitor;

        impl Visitor<'_> for TaxDisplayVisitor {
            type Value = TaxDisplay;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(r#"the string "%" or the boolean true"#)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                match value {
                    "%" => Ok(TaxDisplay::Percent),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
                if value {
                    Ok(TaxDisplay::Amount)
                } else {
                    Err(E::invalid_value(de::Unexpected::Bool(value), &self))
                }
            }
        }

        deserializer.deserialize_any(TaxDisplayVisitor)
    }
}

/// Which adjustment lines appear in the invoice subtotal block.
///
/// Replaced wholesale by
/// [`Invoice::toggle_subtotal`](crate::Invoice::toggle_subtotal); use struct
/// update syntax with [`Default`] for fields you don't care about:
///
/// ```
/// use invoicegen::{SubtotalFields, TaxDisplay};
///
/// let fields = SubtotalFields {
///     tax: TaxDisplay::Amount,
///     discounts: true,
///     ..Default::default()
/// };
/// assert!(!fields.shipping);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtotalFields {
    /// Tax line display mode.
    #[serde(default)]
    pub tax: TaxDisplay,
    /// Whether the discounts line is shown.
    #[serde(default)]
    pub discounts: bool,
    /// Whether the shipping line is shown.
    #[serde(default)]
    pub shipping: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fields() {
        let fields = SubtotalFields::default();
        assert_eq!(fields.tax, TaxDisplay::Percent);
        assert!(!fields.discounts);
        assert!(!fields.shipping);
    }

    #[test]
    fn test_tax_display_wire_values() {
        let percent = serde_json::to_value(TaxDisplay::Percent).unwrap();
        assert_eq!(percent, serde_json::json!("%"));

        let amount = serde_json::to_value(TaxDisplay::Amount).unwrap();
        assert_eq!(amount, serde_json::json!(true));
    }

    #[test]
    fn test_tax_display_deserialization() {
        let percent: TaxDisplay = serde_json::from_str(r#""%""#).unwrap();
        assert_eq!(percent, TaxDisplay::Percent);

        let amount: TaxDisplay = serde_json::from_str("true").unwrap();
        assert_eq!(amount, TaxDisplay::Amount);

        assert!(serde_json::from_str::<TaxDisplay>("false").is_err());
        assert!(serde_json::from_str::<TaxDisplay>(r#""flat""#).is_err());
    }

    #[test]
    fn test_fields_serialization() {
        let fields = SubtotalFields {
            tax: TaxDisplay::Percent,
            discounts: true,
            shipping: false,
        };
        let json = serde_json::to_value(fields).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"tax": "%", "discounts": true, "shipping": false})
        );
    }
}
