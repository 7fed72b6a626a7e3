//! Calculator commands.
//!
//! This module contains the `Command` trait, the dispatcher, and every
//! concrete command the REPL can run. [`register_all`] is the single bootstrap
//! list; nothing registers itself implicitly.

pub mod core;
mod expression;
mod help;
mod history;
mod operation;
mod utility;

use std::rc::Rc;

pub use self::core::{CommandRegistry, Context, ExecutionLog, Reply};

use self::core::Command;
use crate::expression::ExpressionEvaluator;
use crate::operations::OperationRegistry;
use expression::ExpressionCommand;
use help::{HelpCommand, MenuCommand};
use operation::register_operation_commands;
use utility::{ClearScreenCommand, CommandStatsCommand, SystemInfoCommand};

/// Name the REPL routes free-form arithmetic to.
pub const EXPRESSION_COMMAND: &str = "expression";

/// Register every command, in a fixed order.
pub fn register_all(
    commands: &mut CommandRegistry,
    operations: &OperationRegistry,
    evaluator: ExpressionEvaluator,
) {
    register_operation_commands(commands, operations);
    history::register(commands);

    let clear: Rc<dyn Command> = Rc::new(ClearScreenCommand);
    commands.register("clear", Rc::clone(&clear));
    commands.register("cls", clear);
    let system_info: Rc<dyn Command> = Rc::new(SystemInfoCommand);
    commands.register("system-info", Rc::clone(&system_info));
    commands.register("sysinfo", system_info);
    commands.register("command-stats", Rc::new(CommandStatsCommand));

    commands.register("menu", Rc::new(MenuCommand));
    commands.register("help", Rc::new(HelpCommand));
    commands.register(
        EXPRESSION_COMMAND,
        Rc::new(ExpressionCommand::new(evaluator)),
    );
}
