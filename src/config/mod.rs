//! Configuration management for adpage

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use crate::marquee::MarqueeConfig;
use crate::menu::MenuPlacement;
use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_ENV: &str = "ADPAGE_CONFIG_PATH";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Poll timeout in milliseconds for terminal events
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Logo strip animation
    #[serde(default)]
    pub marquee: MarqueeConfig,

    /// Dropdown panel placement
    #[serde(default)]
    pub menu: MenuPlacement,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_tick_rate() -> u64 {
    16
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            marquee: MarqueeConfig::default(),
            menu: MenuPlacement::default(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = self.to_json()?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Pretty-printed JSON form of this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Get the default configuration file path
    ///
    /// `ADPAGE_CONFIG_PATH` wins over the platform config directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("adpage")
            .join("config.json")
    }
}
