//! Calculation history: an in-memory table with CSV persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod csv;
pub mod types;

pub use types::{COLUMNS, HistoryEntry, HistoryStats};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("invalid history file: missing column '{0}'")]
    InvalidSchema(String),
    #[error("malformed history file at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl HistoryError {
    /// Get a static error code string for log labeling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io_error",
            Self::NotFound(_) => "not_found",
            Self::InvalidSchema(_) => "invalid_schema",
            Self::Parse { .. } => "parse_error",
        }
    }
}

/// Ordered table of calculations, indexed from 0.
#[derive(Debug)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    default_path: PathBuf,
}

impl HistoryManager {
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        let default_path = default_path.into();
        debug!(path = %default_path.display(), "History manager initialized");
        Self {
            entries: Vec::new(),
            default_path,
        }
    }

    /// Append a new entry stamped with the current time and return its index.
    pub fn add_entry(&mut self, operation: &str, inputs: &str, result: &str) -> usize {
        self.push(HistoryEntry::now(operation, inputs, result))
    }

    pub fn push(&mut self, entry: HistoryEntry) -> usize {
        debug!(operation = %entry.operation, inputs = %entry.inputs, "Added history entry");
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        info!("History cleared");
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove the entry at `index`; later entries shift down by one.
    pub fn delete_entry(&mut self, index: usize) -> Option<HistoryEntry> {
        if index >= self.entries.len() {
            warn!(index, "Cannot delete history entry: index out of range");
            return None;
        }
        let removed = self.entries.remove(index);
        info!(index, "Deleted history entry");
        Some(removed)
    }

    /// Entries containing `term` in any column, ignoring case.
    pub fn search(&self, term: &str) -> Vec<(usize, &HistoryEntry)> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matches(&needle))
            .collect()
    }

    pub fn stats(&self) -> HistoryStats {
        if self.entries.is_empty() {
            return HistoryStats::default();
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.operation.as_str()).or_default() += 1;
        }
        let mut operation_counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(op, n)| (op.to_string(), n))
            .collect();
        operation_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        // The timestamp layout sorts lexicographically in time order.
        let first = self.entries.iter().map(|e| &e.timestamp).min().cloned();
        let last = self.entries.iter().map(|e| &e.timestamp).max().cloned();

        HistoryStats {
            total_entries: self.entries.len(),
            operation_counts,
            first_entry_time: first,
            last_entry_time: last,
        }
    }

    /// Write the table to `path` (or the default path) and return where it went.
    ///
    /// The parent directory is created if needed and the file is replaced
    /// atomically through a temporary sibling.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf, HistoryError> {
        let path = path.unwrap_or(&self.default_path).to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut out = String::new();
        csv::write_record(&mut out, &COLUMNS);
        for entry in &self.entries {
            csv::write_record(&mut out, &entry.fields());
        }

        let temp_path = path.with_extension("csv.tmp");
        std::fs::write(&temp_path, out)?;
        if let Err(e) = std::fs::rename(&temp_path, &path) {
            if let Err(cleanup) = std::fs::remove_file(&temp_path) {
                warn!(path = %temp_path.display(), error = %cleanup, "Failed to remove temporary history file");
            }
            return Err(e.into());
        }

        info!(path = %path.display(), entries = self.entries.len(), "History saved");
        Ok(path)
    }

    /// Replace the table with the contents of `path` (or the default path).
    ///
    /// A zero-byte file loads as an empty history. On any error the current
    /// table is left untouched.
    pub fn load(&mut self, path: Option<&Path>) -> Result<PathBuf, HistoryError> {
        let path = path.unwrap_or(&self.default_path).to_path_buf();
        if !path.exists() {
            warn!(path = %path.display(), "History file not found");
            return Err(HistoryError::NotFound(path));
        }

        let text = std::fs::read_to_string(&path)?;
        let entries = Self::decode(&text)?;
        info!(path = %path.display(), entries = entries.len(), "History loaded");
        self.entries = entries;
        Ok(path)
    }

    fn decode(text: &str) -> Result<Vec<HistoryEntry>, HistoryError> {
        let mut records = csv::parse(text)?.into_iter();
        let Some(header) = records.next() else {
            return Ok(Vec::new());
        };

        let mut positions = [0usize; 4];
        for (slot, column) in positions.iter_mut().zip(COLUMNS) {
            *slot = header
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| HistoryError::InvalidSchema(column.to_string()))?;
        }

        records
            .enumerate()
            .map(|(row, mut fields)| {
                if fields.len() != header.len() {
                    return Err(HistoryError::Parse {
                        line: row + 2,
                        reason: format!(
                            "expected {} fields, found {}",
                            header.len(),
                            fields.len()
                        ),
                    });
                }
                let mut take = |i: usize| std::mem::take(&mut fields[positions[i]]);
                Ok(HistoryEntry {
                    timestamp: take(0),
                    operation: take(1),
                    inputs: take(2),
                    result: take(3),
                })
            })
            .collect()
    }
}
