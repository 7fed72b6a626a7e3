//! Calculation history configuration.

use serde::Deserialize;

use super::defaults::default_history_path;

/// History configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Default CSV file used by `history-save` / `history-load` without a path.
    #[serde(default = "default_history_path")]
    pub path: String,
    /// Load the default file at startup when it exists.
    #[serde(default)]
    pub autoload: bool,
    /// Save a non-empty history to the default file on shutdown.
    #[serde(default)]
    pub autosave: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            autoload: false,
            autosave: false,
        }
    }
}
