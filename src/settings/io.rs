// src/settings/io.rs
use bevy::log::{debug, info};
use directories_next::ProjectDirs;
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::PathBuf;
use thiserror::Error;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "OrderDeskOrg";
const APPLICATION: &str = "OrderDeskApp";
const CONFIG_FILE: &str = "app_settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine a config directory for app settings")]
    NoConfigDir,
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

fn get_config_path() -> Result<PathBuf, SettingsError> {
    let proj_dirs =
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or(SettingsError::NoConfigDir)?;
    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(CONFIG_FILE))
}

/// Loads settings from the platform config dir. A missing file is not an
/// error; it yields the default.
pub fn load_settings_from_file<T>() -> Result<T, SettingsError>
where
    T: for<'de> serde::de::Deserialize<'de> + Default,
{
    let config_file = get_config_path()?;
    debug!("AppSettings: loading from {:?}", config_file);
    match fs::File::open(&config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            let settings = serde_json::from_reader(reader)?;
            info!("AppSettings: loaded from {:?}", config_file);
            Ok(settings)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("AppSettings: no settings file at {:?}, using defaults.", config_file);
            Ok(T::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn save_settings_to_file<T: serde::Serialize>(settings: &T) -> Result<(), SettingsError> {
    let config_file = get_config_path()?;
    debug!("AppSettings: saving to {:?}", config_file);
    let file = fs::File::create(&config_file)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings)?;
    Ok(())
}
