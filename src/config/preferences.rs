//! Playback preferences and their on-disk representation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// User preferences consulted by the director.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Global autoplay preference: start playback when opening an item.
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Start the main player directly in fullscreen after a switch.
    #[serde(default)]
    pub start_main_player_fullscreen: bool,
    /// Whether the floating popup player may be used.
    #[serde(default = "default_true")]
    pub popup_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            autoplay: true,
            start_main_player_fullscreen: false,
            popup_enabled: true,
        }
    }
}

/// Error types for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    ParseError(String),
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigError::ParseError(s) => write!(f, "Parse error: {}", s),
        }
    }
}

impl Error for ConfigError {}

impl Preferences {
    /// Load preferences from a file, falling back to defaults when the file
    /// does not exist yet.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let prefs: Preferences = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    /// Save preferences to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(&self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("playroute").join("preferences.json")
    }
}
