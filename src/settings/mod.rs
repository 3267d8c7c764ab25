// src/settings/mod.rs
pub mod io;

use bevy::prelude::*;
use bevy_framepace::{FramepaceSettings, Limiter};
use serde::{Deserialize, Serialize};

pub use io::SettingsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FpsSetting {
    Thirty,
    Sixty,
    ScreenHz, // Auto
}

impl Default for FpsSetting {
    fn default() -> Self {
        FpsSetting::Sixty
    }
}

impl FpsSetting {
    pub const ALL: [FpsSetting; 3] = [FpsSetting::Thirty, FpsSetting::Sixty, FpsSetting::ScreenHz];

    pub fn label(&self) -> &'static str {
        match self {
            FpsSetting::Thirty => "30",
            FpsSetting::Sixty => "60",
            FpsSetting::ScreenHz => "Screen Hz",
        }
    }

    pub fn limiter(&self) -> Limiter {
        match self {
            FpsSetting::Thirty => Limiter::from_framerate(30.0),
            FpsSetting::Sixty => Limiter::from_framerate(60.0),
            FpsSetting::ScreenHz => Limiter::Auto,
        }
    }
}

#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub fps_setting: FpsSetting,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            fps_setting: FpsSetting::default(),
        }
    }
}

/// Loads settings at startup and re-applies + persists them whenever the
/// resource changes (i.e. the user picked a different FPS preference).
pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        let settings: AppSettings = match io::load_settings_from_file() {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load app settings, using defaults: {}", e);
                AppSettings::default()
            }
        };
        app.insert_resource(settings);
        app.add_systems(Update, apply_settings.run_if(resource_changed::<AppSettings>));

        info!("SettingsPlugin initialized.");
    }
}

/// Runs on the first frame (the freshly inserted resource counts as changed),
/// applying the loaded preference, and again after every user change.
fn apply_settings(settings: Res<AppSettings>, mut framepace: ResMut<FramepaceSettings>) {
    framepace.limiter = settings.fps_setting.limiter();
    info!("Applied FPS setting: {}.", settings.fps_setting.label());
    if let Err(e) = io::save_settings_to_file(&*settings) {
        warn!("Failed to save app settings: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = AppSettings {
            fps_setting: FpsSetting::Thirty,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_default_is_sixty() {
        assert_eq!(AppSettings::default().fps_setting, FpsSetting::Sixty);
    }

    #[test]
    fn test_limiter_mapping() {
        assert!(matches!(FpsSetting::ScreenHz.limiter(), Limiter::Auto));
        assert!(matches!(FpsSetting::Thirty.limiter(), Limiter::Manual(_)));
        assert!(matches!(FpsSetting::Sixty.limiter(), Limiter::Manual(_)));
    }
}
