//! Settings persistence.
//!
//! The default file lives in the platform config directory:
//! - macOS: ~/Library/Application Support/org.climate-globe.Climate-Globe/
//! - Windows: %APPDATA%/climate-globe/Climate Globe/config/
//! - Linux: ~/.config/climateglobe/

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::Settings;
use crate::error::{Result, SettingsError};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "climate-globe";
const APP_NAME: &str = "Climate Globe";
const CONFIG_FILENAME: &str = "settings.toml";

/// Path of the default settings file, if the platform has a config dir.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Read settings, surfacing every failure.
pub fn try_load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read settings, falling back to defaults when the file is missing or bad.
pub fn load_settings(path: &Path) -> Settings {
    match try_load_settings(path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(SettingsError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "using default settings");
            Settings::default()
        }
    }
}

/// Write settings as pretty TOML, creating parent directories.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content).map_err(|e| SettingsError::io(path, e))?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}
