// src/orders/systems/logic/submit_order.rs
use crate::orders::{
    definitions::OrderRecord,
    events::{OrderBookChanged, OrderOperationFeedback, RequestSubmitOrder},
    resources::OrderBook,
    validation::validate_draft,
};
use crate::ui::elements::form::state::OrderFormState;
use bevy::prelude::*;

/// Validates the submitted draft and, if clean, commits it to the order book:
/// append when no edit target is armed, replace-in-place when one is. The
/// error map is always replaced wholesale, never merged with a previous one.
pub fn handle_submit_order(
    mut events: EventReader<RequestSubmitOrder>,
    mut book: ResMut<OrderBook>,
    mut form_state: ResMut<OrderFormState>,
    mut feedback_writer: EventWriter<OrderOperationFeedback>,
    mut changed_writer: EventWriter<OrderBookChanged>,
) {
    for event in events.read() {
        let errors = validate_draft(&event.draft);
        if !errors.is_empty() {
            let msg = format!("Submit rejected: {} field(s) failed validation.", errors.len());
            info!("{}", msg);
            form_state.field_errors = errors;
            feedback_writer.write(OrderOperationFeedback {
                message: msg,
                is_error: true,
            });
            // Draft and edit target stay untouched for correction.
            continue;
        }

        match event.edit_target {
            None => {
                let record = OrderRecord::from_draft(&event.draft);
                let msg = format!("Added order '{}'.", record.product_name);
                let id = record.id;
                book.append(record);
                info!("{} (id {}; {} total)", msg, id, book.len());
                feedback_writer.write(OrderOperationFeedback {
                    message: msg,
                    is_error: false,
                });
            }
            Some(id) => {
                let record = OrderRecord::with_id(id, &event.draft);
                if book.replace(record) {
                    let msg = format!("Updated order '{}'.", event.draft.product_name);
                    info!("{} (id {}, display position {:?})", msg, id, book.position(id));
                    feedback_writer.write(OrderOperationFeedback {
                        message: msg,
                        is_error: false,
                    });
                } else {
                    // The edited record vanished between edit and submit; keep
                    // the user's input by appending a fresh record instead.
                    warn!("Edit target {} no longer exists. Appending as a new order.", id);
                    let record = OrderRecord::from_draft(&event.draft);
                    book.append(record);
                    feedback_writer.write(OrderOperationFeedback {
                        message: "Edited order was deleted. Saved as a new order.".to_string(),
                        is_error: false,
                    });
                }
            }
        }

        form_state.reset();
        changed_writer.write(OrderBookChanged);
    }
}
