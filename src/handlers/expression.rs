//! The `expression` command.

use super::core::{Command, Context};
use crate::error::CommandResult;
use crate::expression::ExpressionEvaluator;
use crate::operations::format_number;

pub struct ExpressionCommand {
    evaluator: ExpressionEvaluator,
}

impl ExpressionCommand {
    pub fn new(evaluator: ExpressionEvaluator) -> Self {
        Self { evaluator }
    }
}

impl Command for ExpressionCommand {
    /// Tokens are concatenated; whitespace never matters to the evaluator.
    fn execute(&self, _ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
        let expression = args.concat();
        Ok(match self.evaluator.evaluate(&expression) {
            Ok(value) => format_number(value),
            Err(e) => format!("Error evaluating expression: {e}"),
        })
    }
}
