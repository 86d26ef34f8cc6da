//! Configuration for window defaults.
//!
//! Loaded from `$PRINTKIT_CONFIG` if set, otherwise from
//! `<config dir>/printkit/config.toml`. A missing file means defaults;
//! the file is never written.
//!
//! ```toml
//! [window]
//! border = "bright blue"
//! horizontal = "left"
//! vertical = "top"
//! width_shrink = 2
//! height_shrink = 1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Color, DEFAULT_COLOR};
use crate::error::{Error, Result};
use crate::window::{Horizontal, Vertical};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PRINTKIT_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
}

/// Defaults applied to fitted windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Border color name or abbreviation (unknown names mean default)
    pub border: String,
    pub horizontal: Horizontal,
    pub vertical: Vertical,
    /// Columns subtracted from the terminal width
    pub width_shrink: i64,
    /// Rows subtracted from the terminal height
    pub height_shrink: i64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            border: DEFAULT_COLOR.name().to_string(),
            horizontal: Horizontal::default(),
            vertical: Vertical::default(),
            width_shrink: 0,
            height_shrink: 0,
        }
    }
}

impl WindowConfig {
    /// Resolved border color.
    pub fn border_color(&self) -> Color {
        Color::resolve(&self.border)
    }
}

impl Config {
    /// Location of the config file, if one can be determined.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("printkit").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML; missing fields take their defaults, unknown ones are ignored.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
