// src/ui/elements/order_table.rs
// Committed-orders table rendering.

use bevy::prelude::*;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::orders::events::{RequestDeleteOrder, RequestEditOrder};
use crate::orders::resources::OrderRenderCache;

const COLUMN_HEADERS: [&str; 9] = [
    "Product Name",
    "Email",
    "Price",
    "Quantity",
    "Total Amount",
    "City",
    "State",
    "Zip Code",
    "Action",
];

/// Renders one row per committed order, in insertion order, from the
/// pre-formatted render cache. The Action column carries the per-row Edit and
/// Delete controls; both act by record id.
pub fn show_orders_table(
    ui: &mut egui::Ui,
    render_cache: &OrderRenderCache,
    edit_writer: &mut EventWriter<RequestEditOrder>,
    delete_writer: &mut EventWriter<RequestDeleteOrder>,
) {
    if render_cache.rows.is_empty() {
        ui.label("No orders yet. Submit the form to add one.");
        return;
    }

    let row_height = 22.0;

    egui::ScrollArea::both()
        .id_salt("orders_table_scroll_area")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let mut table_builder = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .min_scrolled_height(0.0);

            for _ in 0..COLUMN_HEADERS.len() - 1 {
                table_builder = table_builder.column(Column::auto().at_least(70.0));
            }
            // Action column absorbs the remainder so the buttons never clip.
            table_builder = table_builder.column(Column::remainder().at_least(110.0));

            table_builder
                .header(row_height, |mut header_row| {
                    for title in COLUMN_HEADERS {
                        header_row.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|body| {
                    body.rows(row_height, render_cache.rows.len(), |mut row| {
                        let order_row = &render_cache.rows[row.index()];
                        for cell in &order_row.cells {
                            row.col(|ui| {
                                ui.label(cell.as_str());
                            });
                        }
                        row.col(|ui| {
                            if ui.small_button("Edit").clicked() {
                                edit_writer.write(RequestEditOrder { id: order_row.id });
                            }
                            if ui.small_button("Delete").clicked() {
                                delete_writer.write(RequestDeleteOrder { id: order_row.id });
                            }
                        });
                    });
                });
        });
}
