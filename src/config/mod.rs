//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, LoggingConfig, ReplConfig)
//! - [`history`]: History persistence configuration (HistoryConfig)
//! - [`environment`]: Process environment snapshot (Settings)
//! - [`defaults`]: serde default functions

mod defaults;
mod environment;
mod history;
mod types;

pub use environment::Settings;
pub use types::{Config, LoggingConfig};
