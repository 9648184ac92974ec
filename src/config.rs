use crate::convert::formatter::{
    DEFAULT_PRECISION, EMPTY_INPUT_MESSAGE, INVALID_NUMBER_MESSAGE, MAX_PRECISION, MILES_SUFFIX,
};
use crate::convert::types::ParseMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File the CLI picks up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "kmconv.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("precision {0} is out of range (0-100)")]
    InvalidPrecision(usize),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // How input text is read as a number
    #[serde(default)]
    pub parse_mode: ParseMode,

    // Decimal places of the displayed miles
    #[serde(default = "default_precision")]
    pub precision: usize,

    // Appended to the formatted number
    #[serde(default = "default_suffix")]
    pub suffix: String,

    #[serde(default)]
    pub messages: Messages,
}

/// Texts shown instead of a distance
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Messages {
    #[serde(default = "default_empty_input")]
    pub empty_input: String,

    #[serde(default = "default_invalid_number")]
    pub invalid_number: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_input: default_empty_input(),
            invalid_number: default_invalid_number(),
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_suffix() -> String {
    MILES_SUFFIX.to_string()
}

fn default_empty_input() -> String {
    EMPTY_INPUT_MESSAGE.to_string()
}

fn default_invalid_number() -> String {
    INVALID_NUMBER_MESSAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading config");
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// `path` if given, else `kmconv.toml` in the working directory if present, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::empty()),
        }
    }

    pub fn empty() -> Self {
        Self {
            parse_mode: ParseMode::default(),
            precision: DEFAULT_PRECISION,
            suffix: default_suffix(),
            messages: Messages::default(),
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}
