//! Offline-first ledger core for a community donation dashboard.
//!
//! Records written while disconnected land in a local SQLite store and are
//! reconciled to the remote datastore when connectivity returns. The
//! embedding application constructs the services explicitly and passes them
//! down; nothing here is a global singleton.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::ports::{ConnectivityMonitor, LedgerStore, RemoteError, RemoteLedger};
pub use application::services::{
    CacheService, EntryService, ReconciliationService, SyncOrchestrator, SyncSubscription,
};
pub use domain::entities::{
    DonationDraft, DonationRecord, DonationStatus, ExpenseDraft, ExpenseRecord, KindOutcome,
    NewDonation, NewExpense, Organization, SyncOutcome, SyncStatus,
};
pub use domain::value_objects::{OrganizationId, RecordKind};
pub use infrastructure::database::{ConnectionPool, SqliteLedgerStore};
pub use shared::error::{AppError, Result};
