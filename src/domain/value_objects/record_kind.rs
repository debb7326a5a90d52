use serde::{Deserialize, Serialize};
use std::fmt;

/// The two ledger record kinds. Reconciliation never mixes them: each kind is
/// pushed to its own remote table in an independent pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Donation,
    Expense,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Donation => "donation",
            RecordKind::Expense => "expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
