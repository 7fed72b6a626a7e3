//! Telemetry utilities: log subscriber setup and command timing.

use std::panic::PanicHookInfo;
use std::time::Instant;

use anyhow::Context as _;
use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LoggingConfig, Settings};
use crate::error::panic_message;
use crate::handlers::ExecutionLog;

/// Map a `LOG_LEVEL` value to a filter directive.
///
/// Accepts the conventional level names in any case; `CRITICAL` folds into
/// `error` and `WARNING` into `warn`. Anything else is not a level.
pub fn level_directive(name: &str) -> Option<&'static str> {
    match name.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Some("trace"),
        "DEBUG" => Some("debug"),
        "INFO" => Some("info"),
        "WARNING" | "WARN" => Some("warn"),
        "ERROR" | "CRITICAL" => Some("error"),
        _ => None,
    }
}

/// Pick the active filter: LOG_LEVEL, then RUST_LOG, then the config file.
fn resolve_filter(config: &LoggingConfig, settings: &Settings) -> EnvFilter {
    if let Some(directive) = settings.log_level().and_then(level_directive) {
        return EnvFilter::new(directive);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber writing to `<directory>/<file>`.
///
/// The REPL owns stdout, so log records only go to the file. The returned
/// guard flushes pending records when dropped and must outlive the REPL.
pub fn init_logging(config: &LoggingConfig, settings: &Settings) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&config.directory)
        .with_context(|| format!("failed to create log directory '{}'", config.directory))?;

    let file_appender = tracing_appender::rolling::never(&config.directory, &config.file);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(resolve_filter(config, settings))
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(guard)
}

/// Send panic reports to the log instead of stderr.
///
/// Panics are caught by the dispatcher and the REPL loop, which print their
/// own single-line message.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(log_panic));
}

fn log_panic(info: &PanicHookInfo<'_>) {
    let location = info.location().map(ToString::to_string).unwrap_or_default();
    error!(
        location = %location,
        message = %panic_message(info.payload()),
        "Panic caught"
    );
}

/// Guard for timing command execution.
///
/// Records the invocation into the execution log when dropped, so unwinding
/// out of a command still counts.
pub struct CommandTimer<'a> {
    command: &'a str,
    log: &'a ExecutionLog,
    start: Instant,
}

impl<'a> CommandTimer<'a> {
    /// Start timing a command.
    pub fn new(command: &'a str, log: &'a ExecutionLog) -> Self {
        Self {
            command,
            log,
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer<'_> {
    fn drop(&mut self) {
        self.log.record(self.command, self.start.elapsed());
    }
}
