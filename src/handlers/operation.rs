//! Commands that forward to calculator operations.

use std::rc::Rc;

use super::core::{Command, CommandRegistry, Context};
use crate::error::CommandResult;
use crate::operations::OperationRegistry;

/// Runs one named operation, built fresh from the factory on every call.
pub struct OperationCommand {
    operation: String,
}

impl OperationCommand {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }
}

impl Command for OperationCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
        match ctx.operations.create(&self.operation) {
            Some(operation) => Ok(operation.execute(args)),
            None => Ok(format!("Error: No such operation: {}", self.operation)),
        }
    }
}

/// Register one command per available operation, named after it.
pub fn register_operation_commands(commands: &mut CommandRegistry, operations: &OperationRegistry) {
    for name in operations.list_available() {
        commands.register(&name, Rc::new(OperationCommand::new(name.as_str())));
    }
}
