// src/orders/systems/logic/delete_order.rs
use crate::orders::events::{OrderBookChanged, OrderOperationFeedback, RequestDeleteOrder};
use crate::orders::resources::OrderBook;
use crate::ui::elements::form::state::OrderFormState;
use bevy::prelude::*;

/// Removes the record with the given id; later rows shift up one display
/// position. Deleting the record currently being edited clears the form —
/// the pending update has nothing left to apply to.
pub fn handle_delete_order(
    mut events: EventReader<RequestDeleteOrder>,
    mut book: ResMut<OrderBook>,
    mut form_state: ResMut<OrderFormState>,
    mut feedback_writer: EventWriter<OrderOperationFeedback>,
    mut changed_writer: EventWriter<OrderBookChanged>,
) {
    for event in events.read() {
        if !book.remove(event.id) {
            let msg = format!("Cannot delete: order {} not found.", event.id);
            warn!("{}", msg);
            feedback_writer.write(OrderOperationFeedback {
                message: msg,
                is_error: true,
            });
            continue;
        }

        let mut msg = "Deleted order.".to_string();
        if form_state.edit_target == Some(event.id) {
            form_state.reset();
            msg.push_str(" It was being edited; the form was cleared.");
        }
        info!("{} (id {}; {} remaining)", msg, event.id, book.len());
        feedback_writer.write(OrderOperationFeedback {
            message: msg,
            is_error: false,
        });
        changed_writer.write(OrderBookChanged);
    }
}
