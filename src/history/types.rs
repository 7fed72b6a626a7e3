//! Type definitions for calculation history.

/// Column names of the persisted history table, in write order.
pub const COLUMNS: [&str; 4] = ["timestamp", "operation", "inputs", "result"];

/// Timestamp layout for new entries (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded calculation.
///
/// All fields are kept as text: loaded files may carry values this process
/// never produced, and they are shown back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub operation: String,
    pub inputs: String,
    pub result: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(
        operation: impl Into<String>,
        inputs: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            operation: operation.into(),
            inputs: inputs.into(),
            result: result.into(),
        }
    }

    /// Fields in [`COLUMNS`] order.
    pub fn fields(&self) -> [&str; 4] {
        [&self.timestamp, &self.operation, &self.inputs, &self.result]
    }

    /// Case-insensitive substring match against every column.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

/// Aggregate view over the history table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryStats {
    pub total_entries: usize,
    /// Count per operation, most frequent first, ties by name.
    pub operation_counts: Vec<(String, usize)>,
    pub first_entry_time: Option<String>,
    pub last_entry_time: Option<String>,
}
