//! Interactive read-eval-print loop.
//!
//! Reads lines with rustyline, hands each one to [`App::handle_line`], and
//! prints the reply. Ctrl-C ends the session politely; anything else that
//! breaks the loop is reported as an unexpected error.

pub mod routing;

use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::app::{App, LineOutcome};
use crate::error::panic_message;

const BANNER: &[&str] = &[
    "\n===== Abacus Calculator =====",
    "Type 'help' for available commands or 'exit' to quit.",
    "You can use commands like 'add 5 3' or expressions like '5+3'",
    "Try 'menu' to see available operations",
    "Type 'history' to view your calculation history",
    "=======================================\n",
];

/// Why the loop stopped without an `exit`.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("end of input")]
    EndOfInput,
    #[error("{0}")]
    Readline(#[from] ReadlineError),
    #[error("{0}")]
    Panicked(String),
}

/// How a session ended.
enum Ending {
    Exit,
    Interrupted,
}

pub struct Repl {
    app: App,
    editor: DefaultEditor,
    prompt: String,
}

impl Repl {
    pub fn new(app: App) -> anyhow::Result<Self> {
        let repl_config = &app.config().repl;
        let config = rustyline::Config::builder()
            .max_history_size(repl_config.max_line_history)?
            .auto_add_history(false)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        let prompt = repl_config.prompt.clone();
        Ok(Self {
            app,
            editor,
            prompt,
        })
    }

    /// Run the session to completion.
    ///
    /// The exit status is success on every path, including unexpected errors.
    pub fn start(&mut self) -> ExitCode {
        for line in BANNER {
            println!("{line}");
        }
        info!("REPL started");

        match self.run() {
            Ok(Ending::Exit) => {
                println!("Thank you for using Abacus Calculator. Goodbye!");
            }
            Ok(Ending::Interrupted) => {
                info!("Calculator interrupted by user");
                println!("\nCalculator interrupted. Goodbye!");
            }
            Err(e) => {
                error!(error = %e, "Unexpected error in REPL");
                println!("\nAn unexpected error occurred: {e}");
                println!("Please check the logs for more information.");
            }
        }

        self.app.shutdown();
        ExitCode::SUCCESS
    }

    fn run(&mut self) -> Result<Ending, ReplError> {
        loop {
            let line = match self.editor.readline(&self.prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => return Ok(Ending::Interrupted),
                Err(ReadlineError::Eof) => return Err(ReplError::EndOfInput),
                Err(e) => return Err(e.into()),
            };

            if !line.trim().is_empty() {
                if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                    warn!(error = %e, "Failed to record line in editor history");
                }
            }

            let app = &mut self.app;
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| app.handle_line(&line)))
                .map_err(|payload| ReplError::Panicked(panic_message(payload.as_ref())))?;

            match outcome {
                LineOutcome::Skip => {}
                LineOutcome::Exit => return Ok(Ending::Exit),
                LineOutcome::Reply(reply) => println!("{reply}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ReplError::EndOfInput.to_string(), "end of input");
        assert_eq!(ReplError::Panicked("boom".into()).to_string(), "boom");
        let readline: ReplError = ReadlineError::Interrupted.into();
        assert!(matches!(readline, ReplError::Readline(_)));
    }

    #[test]
    fn test_banner_frames() {
        assert!(BANNER[0].contains("Abacus Calculator"));
        assert!(BANNER.last().unwrap().starts_with("====="));
    }
}
