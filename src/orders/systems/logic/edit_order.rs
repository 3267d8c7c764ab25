// src/orders/systems/logic/edit_order.rs
use crate::orders::events::{OrderOperationFeedback, RequestEditOrder};
use crate::orders::resources::OrderBook;
use crate::ui::elements::form::state::OrderFormState;
use bevy::prelude::*;

/// Loads the requested record's fields into the draft verbatim (a committed
/// record was valid when stored, so no re-validation) and arms the edit
/// target. Stale errors from an earlier failed submit are cleared so the
/// loaded values are not shown under unrelated error labels.
pub fn handle_edit_order(
    mut events: EventReader<RequestEditOrder>,
    book: Res<OrderBook>,
    mut form_state: ResMut<OrderFormState>,
    mut feedback_writer: EventWriter<OrderOperationFeedback>,
) {
    for event in events.read() {
        match book.get(event.id) {
            Some(record) => {
                info!("Editing order '{}' (id {}).", record.product_name, record.id);
                form_state.begin_edit(record);
            }
            None => {
                let msg = format!("Cannot edit: order {} not found.", event.id);
                warn!("{}", msg);
                feedback_writer.write(OrderOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}
