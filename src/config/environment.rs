//! Process environment settings.

use std::collections::BTreeMap;

/// Environment name used when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "PRODUCTION";

/// Snapshot of the process environment, taken after `.env` is applied.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    vars: BTreeMap<String, String>,
}

impl Settings {
    /// Capture the current process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Value of a single environment variable, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Deployment environment name (`ENVIRONMENT`).
    pub fn environment(&self) -> &str {
        self.get("ENVIRONMENT").unwrap_or(DEFAULT_ENVIRONMENT)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.get("LOG_LEVEL")
    }
}
