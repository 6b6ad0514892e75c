// src/config.rs

//! The optional settings file (`~/.config/racoon/config.toml`).

use crate::{
    constants::{DEFAULT_MENU_DIR, DEFAULT_TERMINAL},
    core::paths::{self, PathError},
    models::ColorChoice,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings file '{0}' does not exist.")]
    NotFound(String),
    #[error("Could not access settings file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings file '{path}': {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize default settings to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// User preferences. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// `auto`, `always` or `never`.
    pub color: ColorChoice,
    /// Show the banner above the top-level menu.
    pub banner: bool,
    /// Menu root used when no path is given on the command line.
    pub menu_dir: String,
    /// Terminal emulator command used when stdout is not a terminal. Empty disables it.
    pub terminal: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            banner: true,
            menu_dir: DEFAULT_MENU_DIR.to_string(),
            terminal: DEFAULT_TERMINAL.to_string(),
        }
    }
}

/// Loads settings from `explicit` when given (it must exist), otherwise from the
/// default location, which is created with default values on first use.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound(paths::display_path(path)));
            }
            load_from(path)
        }
        None => load_or_create_default(),
    }
}

fn load_or_create_default() -> Result<Settings, ConfigError> {
    let settings_path = paths::get_config_file_path()?;
    if !settings_path.exists() {
        let default_settings = Settings::default();
        let toml_string = toml::to_string_pretty(&default_settings)?;
        fs::write(&settings_path, toml_string).map_err(|e| ConfigError::Io {
            path: paths::display_path(&settings_path),
            source: e,
        })?;
        log::debug!("Default settings written to '{}'", settings_path.display());
        Ok(default_settings)
    } else {
        load_from(&settings_path)
    }
}

/// Reads and parses one settings file.
pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: paths::display_path(path),
        source: e,
    })?;
    let settings = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: paths::display_path(path),
        source: e,
    })?;
    log::debug!("Settings loaded from '{}': {:?}", path.display(), settings);
    Ok(settings)
}
