//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

// =============================================================================
// History Defaults
// =============================================================================

pub fn default_history_path() -> String {
    "data/history.csv".to_string()
}

// =============================================================================
// Logging Defaults
// =============================================================================

pub fn default_log_directory() -> String {
    "logs".to_string()
}

pub fn default_log_file() -> String {
    "calculator.log".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

// =============================================================================
// REPL Defaults
// =============================================================================

pub fn default_prompt() -> String {
    "calc> ".to_string()
}

pub fn default_max_line_history() -> usize {
    100
}
