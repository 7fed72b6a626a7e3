//! History management commands.
//!
//! Each command is registered under a hyphenated name (`history-save`) and a
//! run-together alias (`historysave`); `history` itself has no alias.

use std::path::PathBuf;
use std::rc::Rc;

use tracing::{error, info};

use super::core::{Command, CommandRegistry, Context};
use crate::error::CommandResult;
use crate::history::HistoryEntry;

pub fn register(commands: &mut CommandRegistry) {
    commands.register("history", Rc::new(ShowHistory));

    let aliased: [(&str, &str, Rc<dyn Command>); 6] = [
        ("history-save", "historysave", Rc::new(SaveHistory)),
        ("history-load", "historyload", Rc::new(LoadHistory)),
        ("history-clear", "historyclear", Rc::new(ClearHistory)),
        ("history-delete", "historydelete", Rc::new(DeleteHistoryEntry)),
        ("history-stats", "historystats", Rc::new(HistoryStatistics)),
        ("history-search", "historysearch", Rc::new(SearchHistory)),
    ];
    for (name, alias, command) in aliased {
        commands.register(name, Rc::clone(&command));
        commands.register(alias, command);
    }
}

fn format_entry(index: usize, entry: &HistoryEntry) -> String {
    format!(
        "{index}: [{}] {} {} = {}",
        entry.timestamp, entry.operation, entry.inputs, entry.result
    )
}

/// Resolve an optional path argument, appending `.csv` when missing.
fn csv_path(args: &[&str]) -> Option<PathBuf> {
    args.first().map(|arg| {
        if arg.ends_with(".csv") {
            PathBuf::from(*arg)
        } else {
            PathBuf::from(format!("{arg}.csv"))
        }
    })
}

/// `history [n]`: show all entries, or the last `n`.
pub struct ShowHistory;

impl Command for ShowHistory {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
        let entries = ctx.history.entries();
        if entries.is_empty() {
            return Ok("No calculation history available.".to_string());
        }

        let limit = match args.first() {
            None => entries.len(),
            Some(arg) => match arg.parse::<i64>() {
                Ok(n) if n <= 0 => return Ok("Number of entries must be positive.".to_string()),
                Ok(n) => usize::try_from(n).unwrap_or(usize::MAX),
                Err(_) => {
                    return Ok(format!(
                        "Invalid argument: '{arg}' - must be a positive number."
                    ));
                }
            },
        };

        let start = entries.len().saturating_sub(limit);
        let mut lines = vec!["\n=== Calculation History ===".to_string()];
        lines.extend(
            entries[start..]
                .iter()
                .enumerate()
                .map(|(offset, entry)| format_entry(start + offset, entry)),
        );
        lines.push(format!(
            "\nShowing {} of {} entries.",
            entries.len() - start,
            entries.len()
        ));
        lines.push("Use 'history <number>' to limit entries shown.".to_string());
        lines.push("Use 'history-save' to save history to a file.".to_string());

        info!(shown = entries.len() - start, "Displayed history entries");
        Ok(lines.join("\n"))
    }
}

/// `history-save [path]`
pub struct SaveHistory;

impl Command for SaveHistory {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
        if ctx.history.is_empty() {
            return Ok("No history to save.".to_string());
        }
        let path = csv_path(args);
        Ok(match ctx.history.save(path.as_deref()) {
            Ok(saved) => format!("History saved to {}", saved.display()),
            Err(e) => {
                error!(error = %e, kind = e.error_code(), "Failed to save history");
                "Error saving history. See logs for details.".to_string()
            }
        })
    }
}

/// `history-load [path]`
pub struct LoadHistory;

impl Command for LoadHistory {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
        let path = csv_path(args);
        if let Some(path) = path.as_deref().filter(|p| !p.exists()) {
            return Ok(format!("File not found: {}", path.display()));
        }
        Ok(match ctx.history.load(path.as_deref()) {
            Ok(loaded) => format!(
                "Loaded {} history entries from {}",
                ctx.history.len(),
                loaded.display()
            ),
            Err(e) => {
                error!(error = %e, kind = e.error_code(), "Failed to load history");
                "Error loading history. See logs for details.".to_string()
            }
        })
    }
}

/// `history-clear`
pub struct ClearHistory;

impl Command for ClearHistory {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[&str]) -> CommandResult {
        if ctx.history.is_empty() {
            return Ok("History is already empty.".to_string());
        }
        ctx.history.clear();
        Ok("History cleared.".to_string())
    }
}

/// `history-delete <index>`
pub struct DeleteHistoryEntry;

impl Command for DeleteHistoryEntry {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
        let Some(arg) = args.first() else {
            return Ok("Error: Please specify an entry index to delete.".to_string());
        };
        let Ok(index) = arg.parse::<i64>() else {
            return Ok(format!(
                "Error: Invalid index '{arg}'. Please provide a numeric index."
            ));
        };
        let removed = usize::try_from(index)
            .ok()
            .and_then(|i| ctx.history.delete_entry(i));
        Ok(match removed {
            Some(_) => format!("Deleted history entry at index {index}."),
            None => format!("Error: Entry {index} not found."),
        })
    }
}

/// `history-stats`
pub struct HistoryStatistics;

impl Command for HistoryStatistics {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[&str]) -> CommandResult {
        let stats = ctx.history.stats();
        if stats.total_entries == 0 {
            return Ok("No history entries available for statistics.".to_string());
        }

        let mut lines = vec![
            "\n=== History Statistics ===".to_string(),
            format!("Total entries: {}", stats.total_entries),
            "\nOperation counts:".to_string(),
        ];
        lines.extend(
            stats
                .operation_counts
                .iter()
                .map(|(op, count)| format!("  - {op}: {count}")),
        );
        lines.push(format!(
            "\nFirst entry: {}",
            stats.first_entry_time.unwrap_or_default()
        ));
        lines.push(format!(
            "Last entry: {}",
            stats.last_entry_time.unwrap_or_default()
        ));
        Ok(lines.join("\n"))
    }
}

/// `history-search <term...>`
pub struct SearchHistory;

impl Command for SearchHistory {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
        if args.is_empty() {
            return Ok("Error: Please provide a search term.".to_string());
        }
        let term = args.join(" ");
        let results = ctx.history.search(&term);
        if results.is_empty() {
            return Ok(format!("No history entries found matching '{term}'."));
        }

        let mut lines = vec![format!("\n=== Search Results for '{term}' ===")];
        lines.extend(results.iter().map(|(i, entry)| format_entry(*i, entry)));
        lines.push(format!("\nFound {} matching entries.", results.len()));
        info!(term = %term, matches = results.len(), "Searched history");
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::history::HistoryManager;
    use crate::operations::OperationRegistry;
    use tempfile::TempDir;

    struct Harness {
        commands: CommandRegistry,
        operations: OperationRegistry,
        history: HistoryManager,
        settings: Settings,
    }

    impl Harness {
        fn new(dir: &TempDir) -> Self {
            let mut commands = CommandRegistry::new();
            register(&mut commands);
            Self {
                commands,
                operations: OperationRegistry::new(),
                history: HistoryManager::new(dir.path().join("history.csv")),
                settings: Settings::default(),
            }
        }

        fn run(&mut self, name: &str, args: &[&str]) -> String {
            let mut ctx = Context {
                operations: &self.operations,
                history: &mut self.history,
                settings: &self.settings,
                registry: &self.commands,
            };
            self.commands.execute_unchecked(name, args, &mut ctx).text
        }

        fn seed(&mut self) {
            self.history.add_entry("add", "5 10 15", "30.0");
            self.history.add_entry("multiply", "2 3", "6.0");
            self.history.add_entry("add", "1 1", "2.0");
        }
    }

    #[test]
    fn test_aliases_registered() {
        let mut commands = CommandRegistry::new();
        register(&mut commands);
        for name in [
            "history",
            "history-save",
            "historysave",
            "history-load",
            "historyload",
            "history-clear",
            "historyclear",
            "history-delete",
            "historydelete",
            "history-stats",
            "historystats",
            "history-search",
            "historysearch",
        ] {
            assert!(commands.contains(name), "{name} missing");
        }
    }

    #[test]
    fn test_show_empty() {
        let dir = TempDir::new().unwrap();
        let mut h = Harness::new(&dir);
        assert_eq!(h.run("history", &[]), "No calculation history available.");
    }

    #[test]
    fn test_show_all_and_limited() {
        let dir = TempDir::new().unwrap();
        let mut h = Harness::new(&dir);
        h.seed();

        let all = h.run("history", &[]);
        assert!(all.starts_with("\n=== Calculation History ==="));
        assert!(all.contains("] add 5 10 15 = 30.0"));
        assert!(all.contains("Showing 3 of 3 entries."));

        let last = h.run("history", &["1"]);
        assert!(last.contains("2: ["));
        assert!(!last.contains("5 10 15"));
        assert!(last.contains("Showing 1 of 3 entries."));

        let more = h.run("history", &["10"]);
        assert!(more.contains("Showing 3 of 3 entries."));
    }

    #[test]
    fn test_show_bad_limits() {
        let dir = TempDir::new().unwrap();
        let mut h = Harness::new(&dir);
        h.seed();
        assert_eq!(h.run("history", &["0"]), "Number of entries must be positive.");
        assert_eq!(h.run("history", &["-2"]), "Number of entries must be positive.");
        assert_eq!(
            h.run("history", &["lots"]),
            "Invalid argument: 'lots' - must be a positive number."
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut h = Harness::new(&dir);
        assert_eq!(h.run("history-save", &[]), "No history to save.");

        h.seed();
        let target = dir.path().join("backup");
        let target_arg = target.to_str().unwrap();
        let expected = dir.path().join("backup.csv");
        assert_eq!(
            h.run("history-save", &[target_arg]),
            format!("History saved to {}", expected.display())
        );
        assert!(expected.exists());

        h.run("history-clear", &[]);
        assert_eq!(
            h.run("historyload", &[target_arg]),
            format!("Loaded 3 history entries from {}", expected.display())
        );
        assert_eq!(h.history.len(), 3);
    }

    #[test]
    fn test_save_default_path() {
        let dir = TempDir::new().unwrap();
        let mut h = Harness::new(&dir);
        h.seed();
        let reply = h.run("history-save", &[]);
        assert!(reply.starts_with("History saved to "));
        assert!(dir.path().join("history.csv").exists());
    }

    #[test]
    fn test_load_missing() {
        let dir = TempDir::new().unwrap();
        let mut h = Harness::new(&dir);
        let missing = dir.path().join("missing.csv");
        assert_eq!(
            h.run("history-load", &[missing.to_str().unwrap()]),
            format!("File not found: {}", missing.display())
        );
        assert_eq!(
            h.run("history-load", &[]),
            "Error loading history. See logs for details."
        );
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let mut h = Harness::new(&dir);
        assert_eq!(h.run("history-clear", &[]), "History is already empty.");
        h.seed();
        assert_eq!(h.run("historyclear", &[]), "History cleared.");
        assert!(h.history.is_empty());
    }

    #[test]
    fn test_delete() {
        let dir = TempDir::new().unwrap();
        let mut h = Harness::new(&dir);
        h.seed();
        assert_eq!(
            h.run("history-delete", &[]),
            "Error: Please specify an entry index to delete."
        );
        assert_eq!(
            h.run("history-delete", &["first"]),
            "Error: Invalid index 'first'. Please provide a numeric index."
        );
        assert_eq!(h.run("history-delete", &["7"]), "Error: Entry 7 not found.");
        assert_eq!(h.run("history-delete", &["-1"]), "Error: Entry -1 not found.");
        assert_eq!(
            h.run("history-delete", &["0"]),
            "Deleted history entry at index 0."
        );
        assert_eq!(h.history.len(), 2);
        assert_eq!(h.history.entries()[0].operation, "multiply");
    }

    #[test]
    fn test_stats() {
        let dir = TempDir::new().unwrap();
        let mut h = Harness::new(&dir);
        assert_eq!(
            h.run("history-stats", &[]),
            "No history entries available for statistics."
        );
        h.seed();
        let text = h.run("historystats", &[]);
        assert!(text.contains("=== History Statistics ==="));
        assert!(text.contains("Total entries: 3"));
        assert!(text.contains("  - add: 2\n  - multiply: 1"));
        assert!(text.contains("First entry: "));
        assert!(text.contains("Last entry: "));
    }

    #[test]
    fn test_search() {
        let dir = TempDir::new().unwrap();
        let mut h = Harness::new(&dir);
        h.seed();
        assert_eq!(
            h.run("history-search", &[]),
            "Error: Please provide a search term."
        );
        assert_eq!(
            h.run("history-search", &["divide"]),
            "No history entries found matching 'divide'."
        );

        let text = h.run("history-search", &["ADD"]);
        assert!(text.contains("=== Search Results for 'ADD' ==="));
        assert!(text.contains("Found 2 matching entries."));

        let text = h.run("historysearch", &["5", "10"]);
        assert!(text.contains("0: ["));
        assert!(text.contains("Found 1 matching entries."));
    }
}
