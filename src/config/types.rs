//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{
    default_log_directory, default_log_file, default_log_level, default_max_line_history,
    default_prompt,
};
use super::history::HistoryConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Calculator configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// History persistence.
    #[serde(default)]
    pub history: HistoryConfig,
    /// Log file location and level.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Interactive loop settings.
    #[serde(default)]
    pub repl: ReplConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a file that does not exist yields defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Directory for log files, created at startup.
    #[serde(default = "default_log_directory")]
    pub directory: String,
    /// Log file name inside `directory`.
    #[serde(default = "default_log_file")]
    pub file: String,
    /// Fallback filter directive when neither LOG_LEVEL nor RUST_LOG applies.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

/// REPL configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Line-editor recall depth (arrow-key history), not calculation history.
    #[serde(default = "default_max_line_history")]
    pub max_line_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            max_line_history: default_max_line_history(),
        }
    }
}
