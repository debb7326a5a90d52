use crate::domain::entities::{DonationRecord, ExpenseRecord, Organization};
use crate::domain::value_objects::{OrganizationId, RecordKind};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Local durable store for ledger records.
///
/// Every operation wraps a single storage transaction. `put_*` is an
/// idempotent insert-or-replace by primary key; the `*_by_organization`
/// queries return records ordered by business date descending with a
/// deterministic tie-break.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn put_donation(&self, donation: &DonationRecord) -> Result<(), AppError>;
    async fn put_expense(&self, expense: &ExpenseRecord) -> Result<(), AppError>;
    async fn put_organization(&self, organization: &Organization) -> Result<(), AppError>;

    async fn donations_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<DonationRecord>, AppError>;
    async fn expenses_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<ExpenseRecord>, AppError>;

    async fn unsynced_donations(&self) -> Result<Vec<DonationRecord>, AppError>;
    async fn unsynced_expenses(&self) -> Result<Vec<ExpenseRecord>, AppError>;

    /// Flip `synced` to true for the record with this id. A missing id is a
    /// no-op: the record may have disappeared between a listing pass and the
    /// mark call, and callers must tolerate that.
    async fn mark_synced(&self, kind: RecordKind, id: &str) -> Result<(), AppError>;

    /// Live count of unsynced donations plus unsynced expenses.
    async fn count_unsynced(&self) -> Result<u64, AppError>;

    async fn organization(&self, id: &str) -> Result<Option<Organization>, AppError>;
    async fn organizations(&self) -> Result<Vec<Organization>, AppError>;
}
