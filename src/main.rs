//! abacus - interactive command-line calculator
//!
//! Named arithmetic and statistics commands, left-to-right expressions with
//! parentheses, and a calculation history that persists as CSV.

mod app;
mod config;
mod error;
mod expression;
mod handlers;
mod history;
mod operations;
mod repl;
mod telemetry;

use std::process::ExitCode;

use anyhow::Context as _;
use tracing::info;

use crate::app::App;
use crate::config::{Config, Settings};
use crate::repl::Repl;

fn main() -> anyhow::Result<ExitCode> {
    // A missing .env is fine; variables already in the environment win.
    let _ = dotenvy::dotenv();
    let settings = Settings::from_env();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "abacus.toml".to_string());
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("failed to load config '{config_path}'"))?;

    let _log_guard = telemetry::init_logging(&config.logging, &settings)?;
    telemetry::install_panic_hook();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        environment = %settings.environment(),
        "Starting abacus"
    );

    let app = App::new(config, settings)?;
    let mut repl = Repl::new(app)?;
    Ok(repl.start())
}
