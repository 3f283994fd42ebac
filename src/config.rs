//! Session configuration.
//!
//! Game constants are fixed; only how the session is driven (seeding, the
//! calendar year, the intro banner) can be configured.

use derive_getters::Getters;
use derive_more::{Display, Error};
use lucky_rules::{MAX_BIRTH_YEAR, MIN_BIRTH_YEAR};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Years accepted for `current_year`, matching the birth-year range.
pub const CURRENT_YEAR_RANGE: std::ops::RangeInclusive<i32> =
    (MIN_BIRTH_YEAR as i32)..=(MAX_BIRTH_YEAR as i32);

/// Configuration for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct SessionConfig {
    /// Seed for the number generator. Random from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Calendar year used for age computation. System clock when absent.
    #[serde(default)]
    current_year: Option<i32>,

    /// Whether to print the welcome text and rules.
    #[serde(default = "default_show_intro")]
    show_intro: bool,
}

#[instrument]
fn default_show_intro() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            current_year: None,
            show_intro: default_show_intro(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges that serde cannot express.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(year) = self.current_year
            && !CURRENT_YEAR_RANGE.contains(&year)
        {
            warn!(year, "current_year out of range");
            return Err(ConfigError::new(format!(
                "current_year must be between {} and {}, got {}",
                CURRENT_YEAR_RANGE.start(),
                CURRENT_YEAR_RANGE.end(),
                year
            )));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        current_year: Option<i32>,
        no_intro: bool,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if current_year.is_some() {
            self.current_year = current_year;
        }
        if no_intro {
            self.show_intro = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
