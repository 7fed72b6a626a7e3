//! Per-command execution statistics.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Local};

/// Usage record for one command, created on its first invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionStats {
    pub count: u64,
    pub total_time: Duration,
    pub last_executed: DateTime<Local>,
}

impl ExecutionStats {
    pub fn average_time(&self) -> Duration {
        self.total_time
            .checked_div(self.count.try_into().unwrap_or(u32::MAX))
            .unwrap_or_default()
    }
}

/// Statistics table shared by the dispatcher and the commands it runs.
///
/// Interior mutability lets dispatch take `&self`, so a running command can
/// read the table while its own invocation is being timed.
#[derive(Debug, Default)]
pub struct ExecutionLog {
    entries: RefCell<HashMap<String, ExecutionStats>>,
}

impl ExecutionLog {
    /// Count one invocation of `command` that took `elapsed`.
    pub fn record(&self, command: &str, elapsed: Duration) {
        let now = Local::now();
        let mut entries = self.entries.borrow_mut();
        match entries.get_mut(command) {
            Some(stats) => {
                stats.count += 1;
                stats.total_time += elapsed;
                stats.last_executed = now;
            }
            None => {
                entries.insert(
                    command.to_string(),
                    ExecutionStats {
                        count: 1,
                        total_time: elapsed,
                        last_executed: now,
                    },
                );
            }
        }
    }

    pub fn get(&self, command: &str) -> Option<ExecutionStats> {
        self.entries.borrow().get(command).cloned()
    }

    /// Every recorded command, sorted by name.
    pub fn snapshot(&self) -> Vec<(String, ExecutionStats)> {
        let mut all: Vec<_> = self
            .entries
            .borrow()
            .iter()
            .map(|(name, stats)| (name.clone(), stats.clone()))
            .collect();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }
}
