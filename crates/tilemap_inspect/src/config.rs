//! Inspector configuration
//!
//! Settings are read from a TOML file. Every key is optional:
//!
//! ```toml
//! log_level = "info"
//! list_tiles = true
//! max_listed = 50
//! tile_layers_only = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

const APP_DIR: &str = "tilemap_inspect";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Log level used when neither `RUST_LOG`, `--verbose` nor `DEBUG` apply
    pub log_level: String,
    /// List individual tiles under each layer in the `layers` command
    pub list_tiles: bool,
    /// Upper bound on tiles listed per layer
    pub max_listed: usize,
    /// Restrict draw order to tile layers
    pub tile_layers_only: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            list_tiles: false,
            max_listed: 20,
            tile_layers_only: false,
        }
    }
}

impl InspectConfig {
    /// Load from an explicit path, or from the default location when `None`.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = default_config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Location of the config file when `--config` is not given
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

fn config_dir() -> PathBuf {
    if let Some(xdg) = non_empty_var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = non_empty_var("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR);
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = non_empty_var("HOME") {
            return PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = non_empty_var("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR);
        }
    }

    PathBuf::from(format!(".{APP_DIR}"))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
