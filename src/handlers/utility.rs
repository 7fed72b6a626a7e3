//! Utility commands: screen clearing, system information, usage statistics.

use tracing::info;

use super::core::{Command, Context, ExecutionStats};
use crate::error::CommandResult;
use crate::history::types::TIMESTAMP_FORMAT;

/// ANSI: erase display, cursor home.
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[1;1H";

/// Clears the terminal by emitting the ANSI sequence ahead of its message.
pub struct ClearScreenCommand;

impl Command for ClearScreenCommand {
    fn execute(&self, _ctx: &mut Context<'_>, _args: &[&str]) -> CommandResult {
        Ok(format!("{CLEAR_SEQUENCE}Screen cleared successfully."))
    }
}

pub struct SystemInfoCommand;

impl Command for SystemInfoCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[&str]) -> CommandResult {
        let working_dir = std::env::current_dir()?;
        let info = [
            ("Calculator Version", env!("CARGO_PKG_VERSION").to_string()),
            ("Platform", std::env::consts::OS.to_string()),
            (
                "Current Time",
                chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            ),
            ("Calculator Process ID", std::process::id().to_string()),
            ("System Architecture", std::env::consts::ARCH.to_string()),
            ("Environment", ctx.settings.environment().to_string()),
            ("Working Directory", working_dir.display().to_string()),
        ];

        let mut lines = vec!["\n=== System Information ===".to_string()];
        lines.extend(info.iter().map(|(key, value)| format!("{key}: {value}")));
        info!("Displayed system information");
        Ok(lines.join("\n"))
    }
}

/// Per-command invocation counts and timings from the dispatcher.
///
/// With an argument, only that command's line is shown.
pub struct CommandStatsCommand;

fn stats_line(name: &str, stats: &ExecutionStats) -> String {
    format!(
        "{name}: {} calls, {:.3} ms total, {:.3} ms avg, last at {}",
        stats.count,
        stats.total_time.as_secs_f64() * 1000.0,
        stats.average_time().as_secs_f64() * 1000.0,
        stats.last_executed.format("%H:%M:%S")
    )
}

impl Command for CommandStatsCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
        if let Some(name) = args.first() {
            let name = name.to_lowercase();
            return Ok(match ctx.registry.command_stats(&name) {
                Some(stats) => stats_line(&name, &stats),
                None => format!("No statistics recorded for '{name}'."),
            });
        }

        let stats = ctx.registry.all_stats();
        if stats.is_empty() {
            return Ok("No commands have been executed yet.".to_string());
        }

        let mut lines = vec!["\n=== Command Statistics ===".to_string()];
        lines.extend(stats.iter().map(|(name, s)| stats_line(name, s)));
        Ok(lines.join("\n"))
    }
}
