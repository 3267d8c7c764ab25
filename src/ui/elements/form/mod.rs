// src/ui/elements/form/mod.rs
pub mod state;

use bevy::prelude::*;
use bevy_egui::egui;

use crate::orders::definitions::{OrderField, STATE_OPTIONS};
use crate::orders::events::RequestSubmitOrder;
use state::OrderFormState;

/// Renders the order form: seven inputs in the original entry order, inline
/// error labels under the offending fields, and a Submit button that turns
/// into Update while an edit target is armed.
pub fn show_order_form(
    ui: &mut egui::Ui,
    form: &mut OrderFormState,
    submit_writer: &mut EventWriter<RequestSubmitOrder>,
) {
    let mut submit_clicked = false;
    let mut cancel_clicked = false;

    if form.is_editing() {
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::LIGHT_BLUE, "Editing existing order");
            if ui.small_button("Cancel").clicked() {
                cancel_clicked = true;
            }
        });
        ui.separator();
    }

    for field in OrderField::ALL {
        match field {
            OrderField::State => show_state_selector(ui, form),
            _ => show_text_field(ui, form, field),
        }
        if let Some(message) = form.field_errors.get(&field) {
            ui.colored_label(egui::Color32::RED, message);
        }
        ui.add_space(4.0);
    }

    ui.separator();
    let submit_label = if form.is_editing() { "Update" } else { "Submit" };
    if ui.button(submit_label).clicked() {
        submit_clicked = true;
    }

    // --- Logic AFTER the widgets ---

    if submit_clicked {
        // Snapshot the draft; validation and commit happen in the handler
        // system. On failure it writes the error map back into this state.
        submit_writer.write(RequestSubmitOrder {
            draft: form.draft.clone(),
            edit_target: form.edit_target,
        });
    }

    if cancel_clicked {
        form.reset();
    }
}

fn show_text_field(ui: &mut egui::Ui, form: &mut OrderFormState, field: OrderField) {
    ui.label(field.label());
    ui.add(egui::TextEdit::singleline(form.draft.field_mut(field)).desired_width(220.0));
}

/// Closed selection over the fixed state list; free text never reaches the
/// draft for this field.
fn show_state_selector(ui: &mut egui::Ui, form: &mut OrderFormState) {
    ui.label(OrderField::State.label());
    let selected_text = if form.draft.state.is_empty() {
        "Select state".to_string()
    } else {
        form.draft.state.clone()
    };
    egui::ComboBox::from_id_salt("order_state_selector")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for option in STATE_OPTIONS {
                ui.selectable_value(&mut form.draft.state, option.to_string(), option);
            }
        });
}
