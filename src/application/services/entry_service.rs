use crate::application::ports::LedgerStore;
use crate::domain::entities::{DonationDraft, DonationRecord, ExpenseDraft, ExpenseRecord};
use crate::domain::value_objects::{local_record_id, OrganizationId};
use crate::shared::error::AppError;
use chrono::Utc;
use std::sync::Arc;

/// Offline write path: turns a form submission into a locally durable,
/// unsynced record without touching the network. Callers pick this path when
/// the connectivity signal says the remote is unreachable; the service itself
/// performs no connectivity detection.
pub struct EntryService {
    store: Arc<dyn LedgerStore>,
    default_currency: String,
}

impl EntryService {
    pub fn new(store: Arc<dyn LedgerStore>, default_currency: impl Into<String>) -> Self {
        Self {
            store,
            default_currency: default_currency.into(),
        }
    }

    /// Persist a donation locally and return the minted id so the caller can
    /// render the new record optimistically.
    pub async fn save_donation_offline(
        &self,
        organization_id: OrganizationId,
        draft: DonationDraft,
    ) -> Result<String, AppError> {
        // NaN fails every comparison, so test for the valid range instead of
        // the invalid one.
        if !(draft.amount.is_finite() && draft.amount > 0.0) {
            return Err(AppError::ValidationError(
                "Donation amount must be a positive number".to_string(),
            ));
        }

        let now = Utc::now();
        let record = DonationRecord {
            id: local_record_id::mint_offline_id(),
            organization_id,
            amount: draft.amount,
            currency: draft
                .currency
                .unwrap_or_else(|| self.default_currency.clone()),
            donor_name: draft.donor_name,
            donor_phone: draft.donor_phone,
            donor_email: draft.donor_email,
            payment_method: draft.payment_method,
            status: draft.status.unwrap_or_default(),
            date: draft.date.unwrap_or_else(|| now.date_naive()),
            notes: draft.notes,
            manual_entry: draft.manual_entry.unwrap_or(true),
            synced: false,
            created_at: now,
            updated_at: now,
        };

        self.store.put_donation(&record).await?;
        tracing::debug!(id = %record.id, organization = %record.organization_id, "saved donation offline");
        Ok(record.id)
    }

    pub async fn save_expense_offline(
        &self,
        organization_id: OrganizationId,
        draft: ExpenseDraft,
    ) -> Result<String, AppError> {
        if !(draft.amount.is_finite() && draft.amount > 0.0) {
            return Err(AppError::ValidationError(
                "Expense amount must be a positive number".to_string(),
            ));
        }
        if draft.purpose.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Expense purpose must not be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let record = ExpenseRecord {
            id: local_record_id::mint_offline_id(),
            organization_id,
            amount: draft.amount,
            currency: draft
                .currency
                .unwrap_or_else(|| self.default_currency.clone()),
            purpose: draft.purpose,
            date: draft.date.unwrap_or_else(|| now.date_naive()),
            notes: draft.notes,
            synced: false,
            created_at: now,
            updated_at: now,
        };

        self.store.put_expense(&record).await?;
        tracing::debug!(id = %record.id, organization = %record.organization_id, "saved expense offline");
        Ok(record.id)
    }

    /// Dashboard read path: locally durable records are visible here
    /// immediately after a write, synced or not.
    pub async fn donations_for_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<DonationRecord>, AppError> {
        self.store.donations_by_organization(organization_id).await
    }

    pub async fn expenses_for_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<ExpenseRecord>, AppError> {
        self.store.expenses_by_organization(organization_id).await
    }
}
