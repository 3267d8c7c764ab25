// src/ui/elements/form/state.rs
// Transient state owned by the order form.

use bevy::prelude::Resource;
use uuid::Uuid;

use crate::orders::definitions::{OrderDraft, OrderRecord};
use crate::orders::validation::FieldErrors;

/// The form's working state: the draft being typed, the error map from the
/// last failed submit, and the edit target (which record, by id, the next
/// successful submit replaces — `None` means append).
#[derive(Resource, Debug, Default)]
pub struct OrderFormState {
    pub draft: OrderDraft,
    pub field_errors: FieldErrors,
    pub edit_target: Option<Uuid>,
}

impl OrderFormState {
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Back to clean append mode: empty draft, no errors, no edit target.
    pub fn reset(&mut self) {
        self.draft = OrderDraft::default();
        self.field_errors.clear();
        self.edit_target = None;
    }

    /// Loads a committed record into the draft and arms the edit target.
    /// Clears any errors left over from an earlier failed submit; they
    /// described different values than the ones now shown.
    pub fn begin_edit(&mut self, record: &OrderRecord) {
        self.draft = record.to_draft();
        self.field_errors.clear();
        self.edit_target = Some(record.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::definitions::OrderField;

    fn committed_record() -> OrderRecord {
        OrderRecord::from_draft(&OrderDraft {
            product_name: "Pen".to_string(),
            email: "a@b.com".to_string(),
            price: "10".to_string(),
            quantity: "3".to_string(),
            city: "Pune".to_string(),
            state: "State1".to_string(),
            zip_code: "411001".to_string(),
        })
    }

    #[test]
    fn test_begin_edit_loads_fields_and_clears_stale_errors() {
        let mut state = OrderFormState::default();
        state
            .field_errors
            .insert(OrderField::City, "City should not contain digits".to_string());

        let record = committed_record();
        state.begin_edit(&record);

        assert_eq!(state.draft.product_name, "Pen");
        assert!(state.field_errors.is_empty());
        assert_eq!(state.edit_target, Some(record.id));
        assert!(state.is_editing());
    }

    #[test]
    fn test_reset_returns_to_append_mode() {
        let mut state = OrderFormState::default();
        state.begin_edit(&committed_record());
        state.draft.city = "Pune1".to_string();
        state
            .field_errors
            .insert(OrderField::City, "City should not contain digits".to_string());

        state.reset();

        assert!(state.draft.is_empty());
        assert!(state.field_errors.is_empty());
        assert!(!state.is_editing());
    }
}
