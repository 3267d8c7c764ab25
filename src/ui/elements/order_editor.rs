// src/ui/elements/order_editor.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::orders::events::{RequestDeleteOrder, RequestEditOrder, RequestSubmitOrder};
use crate::orders::resources::OrderRenderCache;
use crate::settings::{AppSettings, FpsSetting};
use crate::ui::UiFeedbackState;

use super::form::state::OrderFormState;
use super::form::show_order_form;
use super::order_table::show_orders_table;

/// Top-level egui pass: top bar (title, FPS preference, feedback line), the
/// order form in a left panel, the orders table in the central panel.
pub fn order_entry_ui(
    mut contexts: EguiContexts,
    mut form_state: ResMut<OrderFormState>,
    render_cache: Res<OrderRenderCache>,
    ui_feedback: Res<UiFeedbackState>,
    mut app_settings: ResMut<AppSettings>,
    mut submit_writer: EventWriter<RequestSubmitOrder>,
    mut edit_writer: EventWriter<RequestEditOrder>,
    mut delete_writer: EventWriter<RequestDeleteOrder>,
) {
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Order Entry Desk");
            ui.separator();
            show_fps_selector(ui, &mut app_settings);
            if !ui_feedback.last_message.is_empty() {
                ui.separator();
                let color = if ui_feedback.is_error {
                    egui::Color32::RED
                } else {
                    egui::Color32::GREEN
                };
                ui.colored_label(color, &ui_feedback.last_message);
            }
        });
    });

    egui::SidePanel::left("order_form_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Product Order");
            ui.separator();
            show_order_form(ui, &mut form_state, &mut submit_writer);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Orders");
        ui.separator();
        show_orders_table(ui, &render_cache, &mut edit_writer, &mut delete_writer);
    });
}

fn show_fps_selector(ui: &mut egui::Ui, settings: &mut ResMut<AppSettings>) {
    ui.label("FPS:");
    // Work on a copy and write back only on an actual change, so resource
    // change detection (which triggers a settings save) stays quiet while the
    // combo box is merely rendered.
    let mut selected = settings.fps_setting;
    egui::ComboBox::from_id_salt("fps_setting_selector")
        .selected_text(selected.label())
        .show_ui(ui, |ui| {
            for option in FpsSetting::ALL {
                ui.selectable_value(&mut selected, option, option.label());
            }
        });
    if selected != settings.fps_setting {
        settings.fps_setting = selected;
    }
}
