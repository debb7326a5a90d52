use crate::application::ports::{LedgerStore, RemoteLedger};
use crate::domain::entities::{KindOutcome, NewDonation, NewExpense, SyncOutcome};
use crate::domain::value_objects::RecordKind;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Pushes locally unsynced records to the remote datastore and marks each one
/// synced on confirmed acceptance.
///
/// Each record commits independently: a failed push leaves that record
/// pending for the next cycle and never aborts the batch, so partial
/// progress survives a mid-batch network drop. Kinds are never mixed; each
/// runs its own pass.
pub struct ReconciliationService {
    store: Arc<dyn LedgerStore>,
    remote: Arc<dyn RemoteLedger>,
}

impl ReconciliationService {
    pub fn new(store: Arc<dyn LedgerStore>, remote: Arc<dyn RemoteLedger>) -> Self {
        Self { store, remote }
    }

    pub async fn push_donations(&self) -> Result<KindOutcome, AppError> {
        let pending = self.store.unsynced_donations().await?;
        let mut outcome = KindOutcome::default();

        for donation in &pending {
            match self.remote.insert_donation(&NewDonation::from(donation)).await {
                Ok(()) => {
                    self.store
                        .mark_synced(RecordKind::Donation, &donation.id)
                        .await?;
                    outcome.success += 1;
                }
                Err(err) => {
                    tracing::warn!(id = %donation.id, error = %err, "failed to push donation");
                    outcome.failed += 1;
                }
            }
        }

        Ok(outcome)
    }

    pub async fn push_expenses(&self) -> Result<KindOutcome, AppError> {
        let pending = self.store.unsynced_expenses().await?;
        let mut outcome = KindOutcome::default();

        for expense in &pending {
            match self.remote.insert_expense(&NewExpense::from(expense)).await {
                Ok(()) => {
                    self.store
                        .mark_synced(RecordKind::Expense, &expense.id)
                        .await?;
                    outcome.success += 1;
                }
                Err(err) => {
                    tracing::warn!(id = %expense.id, error = %err, "failed to push expense");
                    outcome.failed += 1;
                }
            }
        }

        Ok(outcome)
    }

    pub async fn push_all(&self) -> Result<SyncOutcome, AppError> {
        let donations = self.push_donations().await?;
        let expenses = self.push_expenses().await?;
        Ok(SyncOutcome {
            donations,
            expenses,
        })
    }

    pub async fn pending_count(&self) -> Result<u64, AppError> {
        self.store.count_unsynced().await
    }
}
