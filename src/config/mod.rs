//! Configuration module for champdex
//!
//! Manages application configuration including the dataset source, locale,
//! and patch pinning. Configuration is stored in the user's config
//! directory.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChampdexConfig {
    /// Local champion JSON to load when the cache is cold
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Locale code used for fetched text (names, nicknames, descriptions)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Pin fetches to a specific patch instead of the latest
    #[serde(default)]
    pub patch: Option<String>,

    /// Render splash artwork in the browser when the terminal supports it
    #[serde(default = "default_artwork")]
    pub artwork: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_locale() -> String {
    "en_US".to_string()
}

const fn default_artwork() -> bool {
    true
}

impl Default for ChampdexConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            locale: default_locale(),
            patch: None,
            artwork: default_artwork(),
            quiet: false,
        }
    }
}

impl ChampdexConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        let champdex_config_dir = config_dir.join("champdex");
        Ok(champdex_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
