//! The command capability.

use super::context::Context;
use crate::error::CommandResult;

/// A named action the REPL can run.
///
/// `args` are the whitespace-separated tokens after the command name. Expected
/// user mistakes are reported as `Ok` text (usually starting with `Error`);
/// `Err` is reserved for failures the dispatcher should wrap.
pub trait Command {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> CommandResult;
}
