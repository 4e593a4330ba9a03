// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use documents_gallery::config::{self, Config};
//! use documents_gallery::gallery::LookupMissPolicy;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Hide documents whose type or item cannot be resolved
//! config.lookup_miss = Some(LookupMissPolicy::Hide);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::{BufferCapacity, TileSize};
use crate::error::Result;
use crate::gallery::LookupMissPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "DocumentsGallery";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// What to render when a document's type or line item cannot be found.
    #[serde(default)]
    pub lookup_miss: Option<LookupMissPolicy>,
    #[serde(default)]
    pub tile_size: Option<f32>,
    /// Manifest opened when none is given on the command line.
    #[serde(default)]
    pub manifest_path: Option<PathBuf>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            lookup_miss: Some(LookupMissPolicy::default()),
            tile_size: Some(DEFAULT_TILE_SIZE),
            manifest_path: None,
            diagnostics_capacity: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn lookup_miss_policy(&self) -> LookupMissPolicy {
        self.lookup_miss.unwrap_or_default()
    }

    #[must_use]
    pub fn tile_size(&self) -> TileSize {
        self.tile_size.map(TileSize::new).unwrap_or_default()
    }

    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        self.diagnostics_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

/// Returns the settings file location, honoring an explicit directory override.
pub fn config_path(config_dir: Option<&Path>) -> Option<PathBuf> {
    match config_dir {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path.push(CONFIG_FILE);
            path
        }),
    }
}

pub fn load() -> Result<Config> {
    load_from_dir(None)
}

/// Loads the configuration from `config_dir` (or the platform default).
///
/// A missing file is not an error and yields the defaults.
pub fn load_from_dir(config_dir: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path(config_dir) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = config_path(None) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            eprintln!(
                "[WARN] Ignoring invalid settings file {}: {err}",
                path.display()
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
