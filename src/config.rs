//! Configuration file handling
//!
//! Optional TOML file at `<config dir>/morphonyms/config.toml`. Every key
//! has a default, so a missing file is the same as an empty one.

use crate::dictionary::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, is_supported_length};
use crate::timed::TimedSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "morphonyms";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot find the {0} directory")]
    NoDirectory(&'static str),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Player settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Directory of `<length>.txt` word lists; bundled lists when unset
    pub dictionary_dir: Option<PathBuf>,

    /// Where streaks and personal bests are kept
    pub data_dir: Option<PathBuf>,

    /// Word length for random freeplay ladders
    pub freeplay_length: usize,

    /// Word length for timed runs
    pub timed_length: usize,

    /// Seconds per ladder in timed runs
    pub timed_duration: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary_dir: None,
            data_dir: None,
            freeplay_length: 4,
            timed_length: 4,
            timed_duration: 60,
        }
    }
}

impl GameConfig {
    /// Load from `path`, or from the default location when `None`
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read, parsed,
    /// or holds out-of-range values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Self::from_toml(&contents)
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Returns `ConfigError` on malformed TOML, unknown keys, or out-of-range
    /// values.
    ///
    /// # Examples
    /// ```
    /// use morphonyms::config::GameConfig;
    ///
    /// let config = GameConfig::from_toml("timed_duration = 30").unwrap();
    /// assert_eq!(config.timed_duration, 30);
    /// assert_eq!(config.freeplay_length, 4);
    /// ```
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Default config file location
    ///
    /// # Errors
    /// Returns `ConfigError::NoDirectory` if the platform has no config dir.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoDirectory("config"))?;
        Ok(dir.join(APP_DIR).join("config.toml"))
    }

    /// Check lengths and durations are usable
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, length) in [
            ("freeplay_length", self.freeplay_length),
            ("timed_length", self.timed_length),
        ] {
            if !is_supported_length(length) {
                return Err(ConfigError::Invalid(format!(
                    "{name} = {length} is outside {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH}"
                )));
            }
        }
        if self.timed_duration == 0 {
            return Err(ConfigError::Invalid(
                "timed_duration must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolved persistence directory
    ///
    /// # Errors
    /// Returns `ConfigError::NoDirectory` if unset and the platform has no
    /// data dir.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(ConfigError::NoDirectory("data")),
        }
    }

    #[must_use]
    pub const fn timed_settings(&self) -> TimedSettings {
        TimedSettings {
            length: self.timed_length,
            duration: self.timed_duration,
        }
    }
}
