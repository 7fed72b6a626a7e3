//! Command registry and dispatch.
//!
//! The `CommandRegistry` maps names to commands and offers two dispatch
//! policies that produce identical output for registered commands:
//!
//! - [`CommandRegistry::execute_checked`] looks the name up first and reports
//!   an unknown command before attempting anything.
//! - [`CommandRegistry::execute_unchecked`] attempts the invocation directly
//!   and translates a lookup miss into a reply that also points at `help`.

use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::{Level, debug, error, info, span, warn};

use super::context::Context;
use super::stats::{ExecutionLog, ExecutionStats};
use super::traits::Command;
use crate::error::{CommandError, CommandResult, panic_message};
use crate::telemetry::CommandTimer;

/// Outcome classification carried next to the reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    /// The command ran and returned text (which may still describe a user error).
    Completed,
    /// No command with that name is registered.
    UnknownCommand,
    /// The command returned an error or panicked.
    Failed,
}

/// What a dispatch produced: the text to print and how it came about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub status: ReplyStatus,
}

impl Reply {
    fn completed(text: String) -> Self {
        Self {
            text,
            status: ReplyStatus::Completed,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ReplyStatus::Completed
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

enum DispatchError {
    Unknown,
    Failed(CommandError),
}

/// Registry of commands.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Rc<dyn Command>>,
    log: ExecutionLog,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under `name`, replacing any earlier binding.
    ///
    /// Returns false for a blank name. One instance may be bound to several
    /// names.
    pub fn register(&mut self, name: &str, command: Rc<dyn Command>) -> bool {
        if name.trim().is_empty() {
            error!("Refusing to register command with an empty name");
            return false;
        }
        if self.handlers.insert(name.to_string(), command).is_some() {
            warn!(command = %name, "Command already registered, overwriting");
        } else {
            debug!(command = %name, "Registered command");
        }
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn list_available(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Usage statistics for one command; none before its first invocation.
    pub fn command_stats(&self, name: &str) -> Option<ExecutionStats> {
        self.log.get(name)
    }

    /// Usage statistics for every command invoked so far, sorted by name.
    pub fn all_stats(&self) -> Vec<(String, ExecutionStats)> {
        self.log.snapshot()
    }

    /// Look before you leap: reject unknown names, then invoke.
    pub fn execute_checked(&self, name: &str, args: &[&str], ctx: &mut Context<'_>) -> Reply {
        if !self.contains(name) {
            warn!(command = %name, "Unknown command");
            return Reply {
                text: format!("Unknown command: '{name}'"),
                status: ReplyStatus::UnknownCommand,
            };
        }
        self.finish(name, self.try_execute(name, args, ctx))
    }

    /// Easier to ask forgiveness: invoke, and treat a lookup miss as unknown.
    pub fn execute_unchecked(&self, name: &str, args: &[&str], ctx: &mut Context<'_>) -> Reply {
        match self.try_execute(name, args, ctx) {
            Err(DispatchError::Unknown) => {
                warn!(command = %name, "Unknown command");
                Reply {
                    text: format!(
                        "Unknown command: '{name}'. Type 'help' for available commands."
                    ),
                    status: ReplyStatus::UnknownCommand,
                }
            }
            outcome => self.finish(name, outcome),
        }
    }

    fn try_execute(
        &self,
        name: &str,
        args: &[&str],
        ctx: &mut Context<'_>,
    ) -> Result<String, DispatchError> {
        let command = self.handlers.get(name).ok_or(DispatchError::Unknown)?;
        self.invoke(name, command.as_ref(), args, ctx)
            .map_err(DispatchError::Failed)
    }

    fn invoke(
        &self,
        name: &str,
        command: &dyn Command,
        args: &[&str],
        ctx: &mut Context<'_>,
    ) -> CommandResult {
        let command_span = span!(Level::DEBUG, "command", command = %name, argc = args.len());
        let _enter = command_span.enter();
        let _timer = CommandTimer::new(name, &self.log);

        panic::catch_unwind(AssertUnwindSafe(|| command.execute(ctx, args)))
            .unwrap_or_else(|payload| Err(CommandError::Panicked(panic_message(&*payload))))
    }

    fn finish(&self, name: &str, outcome: Result<String, DispatchError>) -> Reply {
        match outcome {
            Ok(text) => {
                info!(command = %name, "Command executed");
                Reply::completed(text)
            }
            Err(DispatchError::Failed(e)) => {
                error!(command = %name, error = %e, kind = e.error_code(), "Command failed");
                Reply {
                    text: format!("Error executing command '{name}': {e}"),
                    status: ReplyStatus::Failed,
                }
            }
            Err(DispatchError::Unknown) => Reply {
                text: format!("Unknown command: '{name}'"),
                status: ReplyStatus::UnknownCommand,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::history::HistoryManager;
    use crate::operations::OperationRegistry;

    struct Echo;

    impl Command for Echo {
        fn execute(&self, _ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
            Ok(args.join(" "))
        }
    }

    struct Shout;

    impl Command for Shout {
        fn execute(&self, _ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
            Ok(args.join(" ").to_uppercase())
        }
    }

    struct Failing;

    impl Command for Failing {
        fn execute(&self, _ctx: &mut Context<'_>, _args: &[&str]) -> CommandResult {
            Err(std::io::Error::other("backend unavailable").into())
        }
    }

    struct Exploding;

    impl Command for Exploding {
        fn execute(&self, _ctx: &mut Context<'_>, _args: &[&str]) -> CommandResult {
            panic!("kaboom")
        }
    }

    struct Fixture {
        operations: OperationRegistry,
        history: HistoryManager,
        settings: Settings,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                operations: OperationRegistry::new(),
                history: HistoryManager::new("unused.csv"),
                settings: Settings::default(),
            }
        }

        fn context<'a>(&'a mut self, registry: &'a CommandRegistry) -> Context<'a> {
            Context {
                operations: &self.operations,
                history: &mut self.history,
                settings: &self.settings,
                registry,
            }
        }
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register("echo", Rc::new(Echo));
        registry.register("fail", Rc::new(Failing));
        registry.register("explode", Rc::new(Exploding));
        registry
    }

    #[test]
    fn test_policies_agree_on_registered_commands() {
        let registry = registry();
        let mut fixture = Fixture::new();
        for (name, args) in [("echo", vec!["a", "b"]), ("fail", vec![]), ("explode", vec!["x"])] {
            let mut ctx = fixture.context(&registry);
            let checked = registry.execute_checked(name, &args, &mut ctx);
            let unchecked = registry.execute_unchecked(name, &args, &mut ctx);
            assert_eq!(checked, unchecked, "policies disagree for {name}");
        }
    }

    #[test]
    fn test_unknown_command_texts() {
        let registry = registry();
        let mut fixture = Fixture::new();
        let mut ctx = fixture.context(&registry);

        let checked = registry.execute_checked("nonexistent", &[], &mut ctx);
        assert_eq!(checked.text, "Unknown command: 'nonexistent'");
        assert_eq!(checked.status, ReplyStatus::UnknownCommand);

        let unchecked = registry.execute_unchecked("nonexistent", &[], &mut ctx);
        assert_eq!(
            unchecked.text,
            "Unknown command: 'nonexistent'. Type 'help' for available commands."
        );
        assert_eq!(unchecked.status, ReplyStatus::UnknownCommand);
    }

    #[test]
    fn test_success_returns_text_verbatim() {
        let registry = registry();
        let mut fixture = Fixture::new();
        let mut ctx = fixture.context(&registry);
        let reply = registry.execute_checked("echo", &["5", "10"], &mut ctx);
        assert!(reply.is_completed());
        assert_eq!(reply.to_string(), "5 10");
    }

    #[test]
    fn test_failure_is_wrapped() {
        let registry = registry();
        let mut fixture = Fixture::new();
        let mut ctx = fixture.context(&registry);
        let reply = registry.execute_unchecked("fail", &[], &mut ctx);
        assert_eq!(
            reply.text,
            "Error executing command 'fail': backend unavailable"
        );
        assert_eq!(reply.status, ReplyStatus::Failed);
    }

    #[test]
    fn test_panic_is_contained() {
        let registry = registry();
        let mut fixture = Fixture::new();
        let mut ctx = fixture.context(&registry);
        let reply = registry.execute_checked("explode", &[], &mut ctx);
        assert_eq!(reply.text, "Error executing command 'explode': kaboom");
        assert_eq!(reply.status, ReplyStatus::Failed);
    }

    #[test]
    fn test_reregistration_latest_wins() {
        let mut registry = registry();
        assert!(registry.register("echo", Rc::new(Shout)));
        let mut fixture = Fixture::new();
        let mut ctx = fixture.context(&registry);
        assert_eq!(registry.execute_checked("echo", &["hi"], &mut ctx).text, "HI");
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut registry = CommandRegistry::new();
        assert!(!registry.register("", Rc::new(Echo)));
        assert!(registry.list_available().is_empty());
    }

    #[test]
    fn test_list_available_sorted() {
        assert_eq!(registry().list_available(), vec!["echo", "explode", "fail"]);
    }

    #[test]
    fn test_stats_track_success_and_failure() {
        let registry = registry();
        let mut fixture = Fixture::new();
        let mut ctx = fixture.context(&registry);
        registry.execute_checked("echo", &[], &mut ctx);
        registry.execute_unchecked("echo", &[], &mut ctx);
        registry.execute_checked("fail", &[], &mut ctx);
        registry.execute_checked("missing", &[], &mut ctx);

        assert_eq!(registry.command_stats("echo").unwrap().count, 2);
        assert_eq!(registry.command_stats("fail").unwrap().count, 1);
        assert!(registry.command_stats("missing").is_none());
        assert!(registry.command_stats("explode").is_none());
        assert_eq!(registry.all_stats().len(), 2);
    }
}
