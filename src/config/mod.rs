// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - The persisted locale choice (`language`)
//! - `[i18n]` - Locale selection behavior
//!
//! # Examples
//!
//! ```no_run
//! use folio_i18n::config;
//! use std::path::Path;
//!
//! let path = Path::new("settings.toml");
//! let mut config = config::load_existing(path)
//!     .expect("Failed to read config")
//!     .unwrap_or_default();
//! config.general.language = Some("fr".to_string());
//! config::save_to_path(&config, path).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Active locale code (e.g., "en", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Locale selection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
    /// Seed the first-run locale from the operating system.
    #[serde(
        default = "default_detect_system_locale",
        skip_serializing_if = "Option::is_none"
    )]
    pub detect_system_locale: Option<bool>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            detect_system_locale: default_detect_system_locale(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub i18n: I18nConfig,
}

impl Config {
    /// Whether the OS locale may pick the first-run locale.
    #[must_use]
    pub fn detect_system_locale(&self) -> bool {
        self.i18n
            .detect_system_locale
            .unwrap_or(DEFAULT_DETECT_SYSTEM_LOCALE)
    }
}

fn default_detect_system_locale() -> Option<bool> {
    Some(DEFAULT_DETECT_SYSTEM_LOCALE)
}

/// Returns the config file path with an optional override directory.
pub fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Loads configuration if the file exists.
///
/// A missing file is `Ok(None)`; an unreadable or invalid one is an error.
pub fn load_existing(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    load_from_path(path).map(Some)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
