// src/history.rs
use crate::models::HistoryRecord;

/// Session-scoped ledger of accepted checks, oldest first.
///
/// The ledger only grows through [`record`](HistoryLedger::record); there is
/// no removal or mutation API. An optional capacity keeps long sessions
/// bounded: once full, the oldest entry is dropped to make room for the
/// newest.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
    limit: Option<usize>,
}

impl HistoryLedger {
    /// A ledger that keeps at most `limit` entries, or everything if `None`.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            records: Vec::new(),
            limit,
        }
    }

    /// Append an entry for an accepted password.
    pub fn record(&mut self, record: HistoryRecord) {
        if let Some(limit) = self.limit {
            // A zero capacity would reject every append, keep at least one.
            let limit = limit.max(1);
            while self.records.len() >= limit {
                self.records.remove(0);
            }
        }
        self.records.push(record);
    }

    /// Every entry, in insertion order.
    pub fn all(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(masked: &str, crack_time: &str) -> HistoryRecord {
        HistoryRecord {
            masked_password: masked.to_string(),
            crack_time: crack_time.to_string(),
        }
    }

    #[test]
    fn test_ledger_starts_empty() {
        let ledger = HistoryLedger::new(None);
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut ledger = HistoryLedger::new(None);
        ledger.record(entry("*bcd", "0.21 seconds"));
        ledger.record(entry("********ass", "1.61 centuries"));
        ledger.record(entry("*******t1!", "2.31 years"));

        let masked: Vec<&str> = ledger
            .all()
            .iter()
            .map(|r| r.masked_password.as_str())
            .collect();
        assert_eq!(masked, vec!["*bcd", "********ass", "*******t1!"]);
    }

    #[test]
    fn test_unbounded_ledger_keeps_everything() {
        let mut ledger = HistoryLedger::new(None);
        for i in 0..1000 {
            ledger.record(entry(&format!("****{}", i), "1.00 years"));
        }
        assert_eq!(ledger.len(), 1000);
    }

    #[test]
    fn test_capacity_drops_the_oldest_entry() {
        let mut ledger = HistoryLedger::new(Some(2));
        ledger.record(entry("**a", "1"));
        ledger.record(entry("**b", "2"));
        ledger.record(entry("**c", "3"));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.all()[0].masked_password, "**b");
        assert_eq!(ledger.all()[1].masked_password, "**c");
    }

    #[test]
    fn test_zero_capacity_still_keeps_the_newest_entry() {
        let mut ledger = HistoryLedger::new(Some(0));
        ledger.record(entry("**a", "1"));
        ledger.record(entry("**b", "2"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.all()[0].masked_password, "**b");
    }

    #[test]
    fn test_duplicate_entries_are_both_kept() {
        let mut ledger = HistoryLedger::new(None);
        ledger.record(entry("********ass", "1.61 centuries"));
        ledger.record(entry("********ass", "1.61 centuries"));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.all()[0], ledger.all()[1]);
    }
}
