//! Command handler context.

use super::registry::CommandRegistry;
use crate::config::Settings;
use crate::history::HistoryManager;
use crate::operations::OperationRegistry;

/// Everything a command may touch, borrowed from the application for the
/// duration of one invocation.
pub struct Context<'a> {
    /// Factory for calculator operations.
    pub operations: &'a OperationRegistry,
    /// Calculation history.
    pub history: &'a mut HistoryManager,
    /// Process environment snapshot.
    pub settings: &'a Settings,
    /// The dispatcher running this command (for usage statistics).
    pub registry: &'a CommandRegistry,
}
