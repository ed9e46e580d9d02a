// SPDX-License-Identifier: MPL-2.0
//! Viewer preferences stored in a `settings.toml` file.
//!
//! The viewer state machine never touches the file system. Hosts load a
//! [`Config`] once and hand the relevant values to the viewer through
//! [`crate::ui::viewer::ViewerProps`].
//!
//! # Examples
//!
//! ```no_run
//! use studio_lightbox::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.viewer.show_thumbnails = Some(false);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing settings file cannot be parsed.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";

/// `[viewer]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Whether the metadata panel is shown when the viewer opens.
    #[serde(default)]
    pub info_panel_visible: Option<bool>,
    /// Whether the thumbnail strip is rendered.
    #[serde(default)]
    pub show_thumbnails: Option<bool>,
    /// Whether neighbours of the current photo are listed for preloading.
    #[serde(default)]
    pub preload_neighbors: Option<bool>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            info_panel_visible: Some(false),
            show_thumbnails: Some(true),
            preload_neighbors: Some(true),
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn info_panel_visible(&self) -> bool {
        self.info_panel_visible.unwrap_or(false)
    }

    #[must_use]
    pub fn show_thumbnails(&self) -> bool {
        self.show_thumbnails.unwrap_or(true)
    }

    #[must_use]
    pub fn preload_neighbors(&self) -> bool {
        self.preload_neighbors.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// A missing file yields the defaults. A file that cannot be read or parsed
/// also yields the defaults, together with a warning key for the host.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("falling back to default settings: {err}");
                    return (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
