//! Unified error handling for abacus.
//!
//! Every layer keeps a typed error. The command dispatcher is the single place
//! where these are flattened into the user-facing strings printed by the REPL.

use std::any::Any;
use thiserror::Error;

// ============================================================================
// Command Errors (command processing)
// ============================================================================

/// Errors that can occur while a registered command runs.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Panicked(String),
}

impl CommandError {
    /// Get a static error code string for log and statistics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io_error",
            Self::Panicked(_) => "panicked",
        }
    }
}

/// Result type for command bodies.
pub type CommandResult = Result<String, CommandError>;

/// Extract the message carried by a caught panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    }
}
