//! User settings for the CLI.
//!
//! Stored in `~/.pejelagarto/config.toml`. Every field is optional; a
//! missing file yields the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::decoder::DecoderConfig;
use crate::encoder::EncoderConfig;

/// Errors that can occur when loading or saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Settings read from the configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Seed for the timestamp position shuffle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Print every pipeline step to stderr.
    #[serde(default)]
    pub verbose: bool,
}

impl Settings {
    /// Load settings from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the settings file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Encoder configuration derived from these settings.
    pub fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            verbose: self.verbose,
            seed: self.seed,
            clock: None,
        }
    }

    /// Decoder configuration derived from these settings.
    pub fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig {
            verbose: self.verbose,
        }
    }
}

/// Get the Pejelagarto config directory (`~/.pejelagarto`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".pejelagarto"))
        .ok_or(ConfigError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_config() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        (temp_dir, config_path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, path) = setup_test_config();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let (_dir, path) = setup_test_config();
        let settings = Settings {
            seed: Some(42),
            log_level: Some("debug".to_string()),
            verbose: true,
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.encoder_config().seed, Some(42));
        assert!(loaded.decoder_config().verbose);
    }

    #[test]
    fn test_partial_file() {
        let (_dir, path) = setup_test_config();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "seed = 7\n").unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.seed, Some(7));
        assert_eq!(loaded.log_level, None);
        assert!(!loaded.verbose);
    }

    #[test]
    fn test_invalid_toml() {
        let (_dir, path) = setup_test_config();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "seed = \"not a number\"").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::TomlParseError(_))
        ));
    }
}
