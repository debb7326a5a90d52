use crate::domain::value_objects::OrganizationId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An expense entry. Same lifecycle as a donation minus donor fields;
/// `purpose` is required and non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub organization_id: OrganizationId,
    pub amount: f64,
    pub currency: String,
    pub purpose: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub synced: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub purpose: String,
    pub currency: Option<String>,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Remote insert payload for an expense; domain fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub organization_id: String,
    pub amount: f64,
    pub currency: String,
    pub purpose: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

impl From<&ExpenseRecord> for NewExpense {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            organization_id: record.organization_id.to_string(),
            amount: record.amount,
            currency: record.currency.clone(),
            purpose: record.purpose.clone(),
            date: record.date,
            notes: record.notes.clone(),
        }
    }
}
