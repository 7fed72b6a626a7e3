//! Application context.
//!
//! `App` owns every long-lived piece of state: both registries, the history
//! store, the environment snapshot, and the loaded configuration. It is built
//! once at startup and lent to commands one invocation at a time.

use anyhow::Context as _;
use tracing::{error, info};

use crate::config::{Config, Settings};
use crate::expression::ExpressionEvaluator;
use crate::handlers::{self, CommandRegistry, Context, EXPRESSION_COMMAND, Reply};
use crate::history::{HistoryError, HistoryManager};
use crate::operations::{OperationRegistry, arithmetic, statistics};
use crate::repl::routing::{self, Route};

/// What one input line produced.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Nothing to do (blank line).
    Skip,
    /// The user asked to leave.
    Exit,
    /// A command or expression ran; print its reply.
    Reply(Reply),
}

pub struct App {
    config: Config,
    settings: Settings,
    commands: CommandRegistry,
    operations: OperationRegistry,
    history: HistoryManager,
}

impl App {
    /// Build the registries and history store.
    pub fn new(config: Config, settings: Settings) -> anyhow::Result<Self> {
        let mut operations = OperationRegistry::new();
        arithmetic::register(&mut operations);
        statistics::register(&mut operations);

        let evaluator =
            ExpressionEvaluator::new().context("failed to compile expression patterns")?;
        let mut commands = CommandRegistry::new();
        handlers::register_all(&mut commands, &operations, evaluator);

        let mut history = HistoryManager::new(&config.history.path);
        if config.history.autoload {
            match history.load(None) {
                Ok(path) => info!(path = %path.display(), entries = history.len(), "History autoloaded"),
                Err(HistoryError::NotFound(_)) => {}
                Err(e) => error!(error = %e, "Failed to autoload history"),
            }
        }

        info!(
            commands = commands.list_available().len(),
            operations = operations.list_available().len(),
            environment = %settings.environment(),
            "Calculator initialized"
        );

        Ok(Self {
            config,
            settings,
            commands,
            operations,
            history,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn execute_checked(&mut self, name: &str, args: &[&str]) -> Reply {
        let mut ctx = Context {
            operations: &self.operations,
            history: &mut self.history,
            settings: &self.settings,
            registry: &self.commands,
        };
        self.commands.execute_checked(name, args, &mut ctx)
    }

    pub fn execute_unchecked(&mut self, name: &str, args: &[&str]) -> Reply {
        let mut ctx = Context {
            operations: &self.operations,
            history: &mut self.history,
            settings: &self.settings,
            registry: &self.commands,
        };
        self.commands.execute_unchecked(name, args, &mut ctx)
    }

    /// Route and run one REPL line, recording successful calculations.
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        match routing::route(line, |name| self.commands.contains(name)) {
            Route::Skip => LineOutcome::Skip,
            Route::Exit => LineOutcome::Exit,
            Route::Expression(expression) => {
                // Registered at bootstrap, so looked up before invoking.
                let reply = self.execute_checked(EXPRESSION_COMMAND, &[expression]);
                if reply.is_completed() && routing::should_record(Some(&reply.text)) {
                    self.history
                        .add_entry(EXPRESSION_COMMAND, expression, &reply.text);
                }
                LineOutcome::Reply(reply)
            }
            Route::Command { name, args } => {
                let reply = self.execute_unchecked(&name, &args);
                if self.operations.contains(&name)
                    && reply.is_completed()
                    && routing::should_record(Some(&reply.text))
                {
                    self.history.add_entry(&name, &args.join(" "), &reply.text);
                }
                LineOutcome::Reply(reply)
            }
        }
    }

    /// Shutdown phase: optional autosave, then the final log record.
    pub fn shutdown(&mut self) {
        if self.config.history.autosave && !self.history.is_empty() {
            if let Err(e) = self.history.save(None) {
                error!(error = %e, "Failed to autosave history");
            }
        }
        info!("Application shutdown");
    }
}
