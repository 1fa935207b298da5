// src/models.rs
use serde::{Deserialize, Serialize};

/// One accepted check: the masked candidate and its crack-time label.
/// Entries never change once they are in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub masked_password: String,
    pub crack_time: String,
}

/// Substring filters for the history table, one per column. `None` means
/// the column is not filtered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryFilter {
    pub masked_contains: Option<String>,
    pub crack_time_contains: Option<String>,
}

impl HistoryFilter {
    pub fn is_active(&self) -> bool {
        self.masked_contains.is_some() || self.crack_time_contains.is_some()
    }
}
