// src/orders/systems/logic/update_render_cache.rs
use crate::orders::events::OrderBookChanged;
use crate::orders::resources::{OrderBook, OrderRenderCache};
use bevy::prelude::*;

/// Rebuilds the per-row display strings (including the derived Total Amount)
/// after any order book mutation. Coalesces multiple change events in the
/// same frame into a single rebuild.
pub fn handle_order_book_changed(
    mut events: EventReader<OrderBookChanged>,
    book: Res<OrderBook>,
    mut cache: ResMut<OrderRenderCache>,
) {
    if events.read().last().is_some() {
        cache.rebuild_from(&book);
        trace!("Rebuilt order render cache ({} row(s)).", cache.rows.len());
    }
}
