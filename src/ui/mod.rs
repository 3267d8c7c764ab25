// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

// Declare UI element modules
pub mod elements;
pub mod systems;

use elements::form::state::OrderFormState;
use elements::order_editor::order_entry_ui;
use systems::handle_ui_feedback;

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the order entry UI.
pub struct OrderUiPlugin;

impl Plugin for OrderUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<OrderFormState>()
            .add_systems(Update, handle_ui_feedback)
            .add_systems(EguiContextPass, order_entry_ui);

        info!("OrderUiPlugin initialized with OrderFormState as a resource.");
    }
}
