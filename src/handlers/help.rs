//! `help` and `menu`: static usage text and the operation listing.

use tracing::info;

use super::core::{Command, Context};
use crate::error::CommandResult;

const HELP_TEXT: &str = "\
======= CALCULATOR COMMANDS =======

Basic Operations:
  add [number1] [number2] ...      - Add numbers together
  subtract [number1] [number2] ... - Subtract subsequent numbers from the first
  multiply [number1] [number2] ... - Multiply numbers together
  divide [number1] [number2] ...   - Divide the first number by subsequent numbers

Statistics:
  mean [number1] [number2] ...     - Arithmetic mean of the numbers
  median [n1] [n2] [n3] ...        - Median of three or more numbers
  stddev [number1] [number2] ...   - Sample standard deviation

Calculator Interface:
  help                             - Show this help message
  menu                             - Show available calculator operations
  clear                            - Clear the screen
  cls                              - Clear the screen (alias)
  system-info                      - Show system information (alias: sysinfo)
  command-stats                    - Show how often each command has run
  exit                             - Exit the calculator

Mathematical Expressions:
  You can also enter expressions directly, like: 2+3*4
  Operators apply strictly left to right; use parentheses to group.

History Management:
  history [limit]                  - Show calculation history (optional: limit entries)
  history-save [filepath]          - Save history to CSV file (default: data/history.csv)
                                     (Can also use \"history save\")
  history-load [filepath]          - Load history from CSV file
                                     (Can also use \"history load\")
  history-clear                    - Clear all history entries
                                     (Can also use \"history clear\")
  history-delete [index]           - Delete a specific history entry
                                     (Can also use \"history delete\")
  history-stats                    - Show statistics about your calculations
                                     (Can also use \"history stats\")
  history-search [term]            - Search history for matching entries
                                     (Can also use \"history search\")

Examples:
  add 5 10 15      => Result: 30.0
  subtract 20 5 3  => Result: 12.0
  multiply 2 3 4   => Result: 24.0
  divide 100 4 5   => Result: 5.0
  5+10-2           => Result: 13.0
  history 5        => Shows the last 5 entries in history
  history stats    => Shows statistics about your calculations";

pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _ctx: &mut Context<'_>, _args: &[&str]) -> CommandResult {
        Ok(HELP_TEXT.to_string())
    }
}

/// Lists every registered operation with its description.
pub struct MenuCommand;

impl Command for MenuCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[&str]) -> CommandResult {
        let names = ctx.operations.list_available();
        if names.is_empty() {
            return Ok("No calculator operations are currently available.".to_string());
        }

        let mut lines = vec!["\n=== Available Calculator Operations ===".to_string()];
        for name in &names {
            let description = ctx
                .operations
                .create(name)
                .map_or("No description available", |op| op.description());
            lines.push(format!("{name}: {description}"));
        }
        lines.extend(
            [
                "",
                "To use an operation, type its name followed by the numbers to operate on.",
                "Example: 'add 5 10 15' to add the numbers 5, 10, and 15.",
                "",
                "Type 'help' for more information on using the calculator.",
            ]
            .map(String::from),
        );

        info!(operations = names.len(), "Menu displayed");
        Ok(lines.join("\n"))
    }
}
