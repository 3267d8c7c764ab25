// src/orders/plugin.rs
use bevy::prelude::*;

use super::events::{
    OrderBookChanged, OrderOperationFeedback, RequestDeleteOrder, RequestEditOrder,
    RequestSubmitOrder,
};
use super::resources::{OrderBook, OrderRenderCache};
use super::systems;

// Define system sets for ordering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum OrderSystemSet {
    UserInput,    // Systems reacting directly to UI events
    ApplyChanges, // Systems mutating the order book and derived state
}

/// Plugin owning the order data model and its mutation handlers.
pub struct OrdersPlugin;

impl Plugin for OrdersPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                OrderSystemSet::UserInput,
                OrderSystemSet::ApplyChanges.after(OrderSystemSet::UserInput),
            ),
        );

        // --- Resource Initialization ---
        app.init_resource::<OrderBook>();
        app.init_resource::<OrderRenderCache>();

        // --- Event Registration ---
        app.add_event::<RequestSubmitOrder>()
            .add_event::<RequestEditOrder>()
            .add_event::<RequestDeleteOrder>()
            .add_event::<OrderOperationFeedback>()
            .add_event::<OrderBookChanged>();

        // --- Update Systems (Organized into Sets) ---
        // Edit only touches the form state, so it runs before the mutating
        // handlers; submit/delete/cache-refresh run chained so a delete and a
        // submit arriving the same frame resolve deterministically.
        app.add_systems(
            Update,
            (systems::logic::handle_edit_order,).in_set(OrderSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                systems::logic::handle_submit_order,
                systems::logic::handle_delete_order,
                systems::logic::handle_order_book_changed,
            )
                .chain()
                .in_set(OrderSystemSet::ApplyChanges),
        );

        info!("OrdersPlugin initialized.");
    }
}
