use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-kind reconciliation tally. One record's failure never aborts the
/// batch, so both counters can be non-zero after a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindOutcome {
    pub success: u32,
    pub failed: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutcome {
    pub donations: KindOutcome,
    pub expenses: KindOutcome,
}

impl SyncOutcome {
    pub fn total_success(&self) -> u32 {
        self.donations.success + self.expenses.success
    }

    pub fn total_failed(&self) -> u32 {
        self.donations.failed + self.expenses.failed
    }
}

/// Status snapshot published to UI observers.
///
/// `pending_count` tracks the live number of unsynced records and is
/// recomputed from the store after every reconciliation pass; `error` carries
/// the last failure message until superseded by a new attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncStatus {
    pub is_syncing: bool,
    pub last_sync_time: Option<DateTime<Utc>>,
    pub pending_count: u64,
    pub error: Option<String>,
}
