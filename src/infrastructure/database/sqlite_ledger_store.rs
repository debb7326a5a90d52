use crate::application::ports::LedgerStore;
use crate::domain::entities::{DonationRecord, ExpenseRecord, Organization};
use crate::domain::value_objects::{OrganizationId, RecordKind};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::rows::{DonationRow, ExpenseRow, OrganizationRow};

/// SQLite-backed ledger store. Each trait method executes one statement
/// against the pool, so every operation is a single storage transaction.
pub struct SqliteLedgerStore {
    pool: SqlitePool,
}

impl SqliteLedgerStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerStore for SqliteLedgerStore {
    async fn put_donation(&self, donation: &DonationRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO donations (
                id, organization_id, amount, currency, donor_name, donor_phone,
                donor_email, payment_method, status, date, notes, manual_entry,
                synced, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            ON CONFLICT(id) DO UPDATE SET
                organization_id = excluded.organization_id,
                amount = excluded.amount,
                currency = excluded.currency,
                donor_name = excluded.donor_name,
                donor_phone = excluded.donor_phone,
                donor_email = excluded.donor_email,
                payment_method = excluded.payment_method,
                status = excluded.status,
                date = excluded.date,
                notes = excluded.notes,
                manual_entry = excluded.manual_entry,
                synced = excluded.synced,
                created_at = excluded.created_at,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&donation.id)
        .bind(donation.organization_id.as_str())
        .bind(donation.amount)
        .bind(&donation.currency)
        .bind(&donation.donor_name)
        .bind(&donation.donor_phone)
        .bind(&donation.donor_email)
        .bind(&donation.payment_method)
        .bind(donation.status.as_str())
        .bind(donation.date.to_string())
        .bind(&donation.notes)
        .bind(donation.manual_entry)
        .bind(donation.synced)
        .bind(donation.created_at.timestamp_millis())
        .bind(donation.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn put_expense(&self, expense: &ExpenseRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO expenses (
                id, organization_id, amount, currency, purpose, date, notes,
                synced, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(id) DO UPDATE SET
                organization_id = excluded.organization_id,
                amount = excluded.amount,
                currency = excluded.currency,
                purpose = excluded.purpose,
                date = excluded.date,
                notes = excluded.notes,
                synced = excluded.synced,
                created_at = excluded.created_at,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&expense.id)
        .bind(expense.organization_id.as_str())
        .bind(expense.amount)
        .bind(&expense.currency)
        .bind(&expense.purpose)
        .bind(expense.date.to_string())
        .bind(&expense.notes)
        .bind(expense.synced)
        .bind(expense.created_at.timestamp_millis())
        .bind(expense.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn put_organization(&self, organization: &Organization) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO organizations (
                id, name, contact_phone, contact_email, raast_id, bank_account,
                easypaisa_account, jazzcash_account, synced, last_synced
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                contact_phone = excluded.contact_phone,
                contact_email = excluded.contact_email,
                raast_id = excluded.raast_id,
                bank_account = excluded.bank_account,
                easypaisa_account = excluded.easypaisa_account,
                jazzcash_account = excluded.jazzcash_account,
                synced = excluded.synced,
                last_synced = excluded.last_synced
            "#,
        )
        .bind(&organization.id)
        .bind(&organization.name)
        .bind(&organization.contact_phone)
        .bind(&organization.contact_email)
        .bind(&organization.raast_id)
        .bind(&organization.bank_account)
        .bind(&organization.easypaisa_account)
        .bind(&organization.jazzcash_account)
        .bind(organization.synced)
        .bind(organization.last_synced.map(|ts| ts.timestamp_millis()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn donations_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<DonationRecord>, AppError> {
        let rows = sqlx::query_as::<_, DonationRow>(
            r#"
            SELECT * FROM donations
            WHERE organization_id = ?1
            ORDER BY date DESC, created_at DESC, id ASC
            "#,
        )
        .bind(organization_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DonationRecord::try_from).collect()
    }

    async fn expenses_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<ExpenseRecord>, AppError> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT * FROM expenses
            WHERE organization_id = ?1
            ORDER BY date DESC, created_at DESC, id ASC
            "#,
        )
        .bind(organization_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ExpenseRecord::try_from).collect()
    }

    async fn unsynced_donations(&self) -> Result<Vec<DonationRecord>, AppError> {
        let rows =
            sqlx::query_as::<_, DonationRow>("SELECT * FROM donations WHERE synced = 0")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(DonationRecord::try_from).collect()
    }

    async fn unsynced_expenses(&self) -> Result<Vec<ExpenseRecord>, AppError> {
        let rows = sqlx::query_as::<_, ExpenseRow>("SELECT * FROM expenses WHERE synced = 0")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ExpenseRecord::try_from).collect()
    }

    async fn mark_synced(&self, kind: RecordKind, id: &str) -> Result<(), AppError> {
        let statement = match kind {
            RecordKind::Donation => {
                "UPDATE donations SET synced = 1, updated_at = ?1 WHERE id = ?2"
            }
            RecordKind::Expense => "UPDATE expenses SET synced = 1, updated_at = ?1 WHERE id = ?2",
        };

        // Zero rows affected means the record vanished between the listing
        // pass and this call; that is not an error.
        sqlx::query(statement)
            .bind(Utc::now().timestamp_millis())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_unsynced(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT (SELECT COUNT(*) FROM donations WHERE synced = 0)
                 + (SELECT COUNT(*) FROM expenses WHERE synced = 0)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count as u64)
    }

    async fn organization(&self, id: &str) -> Result<Option<Organization>, AppError> {
        let row =
            sqlx::query_as::<_, OrganizationRow>("SELECT * FROM organizations WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(Organization::try_from).transpose()
    }

    async fn organizations(&self) -> Result<Vec<Organization>, AppError> {
        let rows =
            sqlx::query_as::<_, OrganizationRow>("SELECT * FROM organizations ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Organization::try_from).collect()
    }
}
