use crate::domain::entities::{DonationRecord, DonationStatus, ExpenseRecord, Organization};
use crate::domain::value_objects::OrganizationId;
use crate::shared::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

// Timestamp columns hold unix milliseconds.
#[derive(Debug, Clone, FromRow)]
pub struct DonationRow {
    pub id: String,
    pub organization_id: String,
    pub amount: f64,
    pub currency: String,
    pub donor_name: Option<String>,
    pub donor_phone: Option<String>,
    pub donor_email: Option<String>,
    pub payment_method: Option<String>,
    pub status: String,
    pub date: String,
    pub notes: Option<String>,
    pub manual_entry: bool,
    pub synced: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct ExpenseRow {
    pub id: String,
    pub organization_id: String,
    pub amount: f64,
    pub currency: String,
    pub purpose: String,
    pub date: String,
    pub notes: Option<String>,
    pub synced: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrganizationRow {
    pub id: String,
    pub name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub raast_id: Option<String>,
    pub bank_account: Option<String>,
    pub easypaisa_account: Option<String>,
    pub jazzcash_account: Option<String>,
    pub synced: bool,
    pub last_synced: Option<i64>,
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| AppError::Database(format!("Invalid stored date '{value}': {err}")))
}

fn parse_timestamp(value: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::<Utc>::from_timestamp_millis(value)
        .ok_or_else(|| AppError::Database(format!("Invalid stored timestamp: {value}")))
}

impl TryFrom<DonationRow> for DonationRecord {
    type Error = AppError;

    fn try_from(row: DonationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            organization_id: OrganizationId::new(row.organization_id)
                .map_err(AppError::Database)?,
            amount: row.amount,
            currency: row.currency,
            donor_name: row.donor_name,
            donor_phone: row.donor_phone,
            donor_email: row.donor_email,
            payment_method: row.payment_method,
            status: row
                .status
                .parse::<DonationStatus>()
                .map_err(AppError::Database)?,
            date: parse_date(&row.date)?,
            notes: row.notes,
            manual_entry: row.manual_entry,
            synced: row.synced,
            created_at: parse_timestamp(row.created_at)?,
            updated_at: parse_timestamp(row.updated_at)?,
        })
    }
}

impl TryFrom<ExpenseRow> for ExpenseRecord {
    type Error = AppError;

    fn try_from(row: ExpenseRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            organization_id: OrganizationId::new(row.organization_id)
                .map_err(AppError::Database)?,
            amount: row.amount,
            currency: row.currency,
            purpose: row.purpose,
            date: parse_date(&row.date)?,
            notes: row.notes,
            synced: row.synced,
            created_at: parse_timestamp(row.created_at)?,
            updated_at: parse_timestamp(row.updated_at)?,
        })
    }
}

impl TryFrom<OrganizationRow> for Organization {
    type Error = AppError;

    fn try_from(row: OrganizationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            contact_phone: row.contact_phone,
            contact_email: row.contact_email,
            raast_id: row.raast_id,
            bank_account: row.bank_account,
            easypaisa_account: row.easypaisa_account,
            jazzcash_account: row.jazzcash_account,
            synced: row.synced,
            last_synced: row.last_synced.map(parse_timestamp).transpose()?,
        })
    }
}
