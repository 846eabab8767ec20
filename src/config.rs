//! User configuration
//!
//! Preferences are stored at `~/.config/taskdeck/config.toml` (XDG
//! standard). A missing or unreadable file falls back to defaults, so the
//! session always starts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration filename under the config directory
const CONFIG_FILE: &str = "config.toml";

/// Global taskdeck configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Whether human output uses color
    #[serde(default = "default_color")]
    pub color: bool,

    /// Prompt shown before each session input line
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// strftime format for the creation-time column in list output
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

const fn default_color() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            prompt: default_prompt(),
            time_format: default_time_format(),
        }
    }
}

impl GlobalConfig {
    /// Load configuration from the default location
    ///
    /// Missing file or unparseable content yields the defaults; a parse
    /// failure is logged rather than aborting the session.
    #[must_use]
    pub fn load() -> Self {
        config_path().map_or_else(Self::default, |path| Self::load_from(&path))
    }

    /// Load configuration from an explicit path
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                log::warn!("ignoring malformed config at {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

/// Path to the user's config file, if a config directory exists
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskdeck").join(CONFIG_FILE))
}
