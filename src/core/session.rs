// src/core/session.rs
use crate::checker::{check_password, Violation};
use crate::core::config::Config;
use crate::estimator::estimate_crack_time;
use crate::history::HistoryLedger;
use crate::masking::mask_password;
use crate::models::HistoryRecord;

/// What one submission produced: the reasons it was rejected, or the entry
/// that went into the ledger.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    Rejected { violations: Vec<Violation> },
    Accepted { record: HistoryRecord },
}

/// One checker session. Owns the history ledger and runs every submission
/// through the same pipeline: validate, then estimate, mask and record.
pub struct CheckerSession {
    ledger: HistoryLedger,
}

impl CheckerSession {
    pub fn new(config: &Config) -> Self {
        Self {
            ledger: HistoryLedger::new(config.history_limit),
        }
    }

    /// Evaluate one candidate. Only accepted candidates reach the ledger,
    /// and only in masked form.
    pub fn submit(&mut self, password: &str) -> CheckOutcome {
        let violations = check_password(password);
        if !violations.is_empty() {
            log::debug!("Candidate rejected with {} violation(s)", violations.len());
            return CheckOutcome::Rejected { violations };
        }

        let record = HistoryRecord {
            masked_password: mask_password(password),
            crack_time: estimate_crack_time(password),
        };
        log::info!("Candidate accepted, estimated crack time: {}", record.crack_time);
        self.ledger.record(record.clone());
        CheckOutcome::Accepted { record }
    }

    /// Ledger entries in insertion order.
    pub fn history(&self) -> &[HistoryRecord] {
        self.ledger.all()
    }

    pub fn history_len(&self) -> usize {
        self.ledger.len()
    }
}
