// src/orders/events.rs
use bevy::prelude::Event;
use uuid::Uuid;

use super::definitions::OrderDraft;

/// Sent when the user presses Submit/Update. Carries a snapshot of the draft
/// and the edit target the form held at that moment; the handler validates and
/// either commits or writes the errors back into the form state.
/// Handled by `orders::systems::logic::handle_submit_order`.
#[derive(Event, Debug, Clone)]
pub struct RequestSubmitOrder {
    pub draft: OrderDraft,
    pub edit_target: Option<Uuid>,
}

/// Sent by a row's Edit button. Loads the record into the form and arms the
/// edit target.
#[derive(Event, Debug, Clone)]
pub struct RequestEditOrder {
    pub id: Uuid,
}

/// Sent by a row's Delete button.
#[derive(Event, Debug, Clone)]
pub struct RequestDeleteOrder {
    pub id: Uuid,
}

/// Outcome of an order operation, surfaced in the UI feedback line.
#[derive(Event, Debug, Clone)]
pub struct OrderOperationFeedback {
    pub message: String,
    pub is_error: bool,
}

/// Fired whenever the order book contents changed, so dependent state (the
/// row render cache) can refresh.
#[derive(Event, Debug, Clone)]
pub struct OrderBookChanged;
