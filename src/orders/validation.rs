// src/orders/validation.rs
use std::collections::HashMap;

use super::definitions::{OrderDraft, OrderField, STATE_OPTIONS};

/// Per-field validation messages for the current submit attempt. Only fields
/// that failed are present; an empty map means the draft is valid.
pub type FieldErrors = HashMap<OrderField, String>;

/// Validates a draft for commit. Every rule is evaluated independently so the
/// user sees all failures at once, not just the first.
pub fn validate_draft(draft: &OrderDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.product_name.is_empty() {
        errors.insert(OrderField::ProductName, "Product name is required".to_string());
    }
    if !draft.email.contains('@') {
        errors.insert(OrderField::Email, "Valid email is required".to_string());
    }
    if !is_numeric(&draft.price) {
        errors.insert(OrderField::Price, "Valid numeric price is required".to_string());
    }
    if !is_numeric(&draft.quantity) {
        errors.insert(OrderField::Quantity, "Valid numeric quantity is required".to_string());
    }
    if draft.city.is_empty() || draft.city.chars().any(|c| c.is_ascii_digit()) {
        errors.insert(OrderField::City, "City should not contain digits".to_string());
    }
    // The combo box only offers STATE_OPTIONS, so anything else reaching the
    // draft is rejected the same as empty.
    if !STATE_OPTIONS.contains(&draft.state.as_str()) {
        errors.insert(OrderField::State, "State is required".to_string());
    }
    if !is_six_digit_zip(&draft.zip_code) {
        errors.insert(OrderField::ZipCode, "Valid 6 digit zip code is required".to_string());
    }

    errors
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.trim().parse::<f64>().is_ok()
}

/// Exactly six ASCII decimal digits, nothing before or after.
fn is_six_digit_zip(value: &str) -> bool {
    value.len() == 6 && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> OrderDraft {
        OrderDraft {
            product_name: "Pen".to_string(),
            email: "a@b.com".to_string(),
            price: "10".to_string(),
            quantity: "3".to_string(),
            city: "Pune".to_string(),
            state: "State1".to_string(),
            zip_code: "411001".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_produces_no_errors() {
        assert!(validate_draft(&valid_draft()).is_empty());
    }

    #[test]
    fn test_empty_product_name_rejected() {
        let mut draft = valid_draft();
        draft.product_name.clear();
        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&OrderField::ProductName));

        draft.product_name = "Pen".to_string();
        assert!(!validate_draft(&draft).contains_key(&OrderField::ProductName));
    }

    #[test]
    fn test_email_must_contain_at_sign() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        assert!(validate_draft(&draft).contains_key(&OrderField::Email));

        // Deliberately shallow rule: any '@' passes.
        draft.email = "@".to_string();
        assert!(!validate_draft(&draft).contains_key(&OrderField::Email));
    }

    #[test]
    fn test_price_and_quantity_must_be_numeric() {
        let mut draft = valid_draft();
        draft.price = String::new();
        draft.quantity = "many".to_string();
        let errors = validate_draft(&draft);
        assert!(errors.contains_key(&OrderField::Price));
        assert!(errors.contains_key(&OrderField::Quantity));

        draft.price = "19.99".to_string();
        draft.quantity = "2".to_string();
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn test_city_rejects_digits_and_empty() {
        let mut draft = valid_draft();
        draft.city = "Pune1".to_string();
        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&OrderField::City));

        draft.city = String::new();
        assert!(validate_draft(&draft).contains_key(&OrderField::City));
    }

    #[test]
    fn test_state_must_be_a_known_option() {
        let mut draft = valid_draft();
        draft.state = String::new();
        assert!(validate_draft(&draft).contains_key(&OrderField::State));

        draft.state = "Atlantis".to_string();
        assert!(validate_draft(&draft).contains_key(&OrderField::State));

        for option in STATE_OPTIONS {
            draft.state = option.to_string();
            assert!(!validate_draft(&draft).contains_key(&OrderField::State));
        }
    }

    #[test]
    fn test_zip_code_must_be_exactly_six_digits() {
        let mut draft = valid_draft();
        for bad in ["", "12345", "1234567", "12345a", " 12345", "12 456"] {
            draft.zip_code = bad.to_string();
            assert!(
                validate_draft(&draft).contains_key(&OrderField::ZipCode),
                "zip '{}' should be rejected",
                bad
            );
        }
        draft.zip_code = "123456".to_string();
        assert!(!validate_draft(&draft).contains_key(&OrderField::ZipCode));
    }

    #[test]
    fn test_all_failures_reported_together() {
        let errors = validate_draft(&OrderDraft::default());
        assert_eq!(errors.len(), OrderField::ALL.len());
    }
}
