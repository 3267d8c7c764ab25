// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use std::time::Duration;

use bevy_egui::EguiPlugin;
use bevy_framepace::FramepacePlugin;

mod orders;
mod settings;
mod ui;

use orders::OrdersPlugin;
use settings::SettingsPlugin;
use ui::OrderUiPlugin;

fn main() {
    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Order Entry Desk".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(FramepacePlugin)
        .add_plugins(SettingsPlugin)
        .add_plugins(OrdersPlugin)
        .add_plugins(OrderUiPlugin)
        .run();
}
