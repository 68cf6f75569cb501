//! Template parameter allow-list.
//!
//! The renderer allows overriding a fixed set of section labels (headers and
//! titles). Anything outside this list is rejected before a request is made.

/// Template parameter names the renderer recognizes.
pub const TEMPLATE_PARAMS: &[&str] = &[
    "header",
    "to_title",
    "ship_to_title",
    "invoice_number_title",
    "date_title",
    "payment_terms_title",
    "due_date_title",
    "purchase_order_title",
    "quantity_header",
    "item_header",
    "unit_cost_header",
    "amount_header",
    "subtotal_title",
    "discounts_title",
    "tax_title",
    "shipping_title",
    "total_title",
    "amount_paid_title",
    "balance_title",
    "terms_title",
    "notes_title",
];

/// Whether `name` is a recognized template parameter.
pub fn is_template_param(name: &str) -> bool {
    TEMPLATE_PARAMS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_params() {
        assert!(is_template_param("header"));
        assert!(is_template_param("notes_title"));
    }

    #[test]
    fn test_unknown_params() {
        assert!(!is_template_param("footer"));
        assert!(!is_template_param(""));
        // Case-sensitive like the renderer itself
        assert!(!is_template_param("Header"));
    }
}
