use crate::domain::entities::{DonationRecord, ExpenseRecord, NewDonation, NewExpense};
use crate::domain::value_objects::OrganizationId;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::fmt;

/// Failure pushing to or reading from the remote datastore.
///
/// Reconciliation treats both variants the same way (leave the record
/// pending and retry on the next cycle); the split exists so callers can log
/// them distinctly.
#[derive(Debug)]
pub enum RemoteError {
    /// The remote declined the record (validation or business rule).
    Rejected(String),
    /// Network or timeout failure before an answer arrived.
    Transport(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Rejected(msg) => write!(f, "Remote rejected: {}", msg),
            RemoteError::Transport(msg) => write!(f, "Transport failure: {}", msg),
        }
    }
}

impl std::error::Error for RemoteError {}

impl From<RemoteError> for AppError {
    fn from(err: RemoteError) -> Self {
        AppError::Remote(err.to_string())
    }
}

/// Remote datastore contract. Inserts carry domain fields only; the remote
/// assigns its own identity and this core never reads those ids back into
/// local unsynced records.
#[async_trait]
pub trait RemoteLedger: Send + Sync {
    async fn insert_donation(&self, donation: &NewDonation) -> Result<(), RemoteError>;
    async fn insert_expense(&self, expense: &NewExpense) -> Result<(), RemoteError>;

    async fn fetch_donations(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<DonationRecord>, RemoteError>;
    async fn fetch_expenses(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<ExpenseRecord>, RemoteError>;
}
