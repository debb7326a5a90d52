use crate::domain::value_objects::OrganizationId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    Pending,
    #[default]
    Completed,
    Failed,
    Refunded,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Completed => "completed",
            DonationStatus::Failed => "failed",
            DonationStatus::Refunded => "refunded",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonationStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(DonationStatus::Pending),
            "completed" => Ok(DonationStatus::Completed),
            "failed" => Ok(DonationStatus::Failed),
            "refunded" => Ok(DonationStatus::Refunded),
            other => Err(format!("Unknown donation status: {other}")),
        }
    }
}

/// A donation as tracked by the local ledger. `id` is either a
/// server-assigned identifier or a locally-minted `offline-…` id; `synced`
/// becomes true only after the remote datastore has confirmed acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: String,
    pub organization_id: OrganizationId,
    pub amount: f64,
    pub currency: String,
    pub donor_name: Option<String>,
    pub donor_phone: Option<String>,
    pub donor_email: Option<String>,
    pub payment_method: Option<String>,
    pub status: DonationStatus,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub manual_entry: bool,
    pub synced: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new manual donation entry. Everything left
/// `None` is filled with defaults at save time.
#[derive(Debug, Clone, Default)]
pub struct DonationDraft {
    pub amount: f64,
    pub donor_name: Option<String>,
    pub donor_phone: Option<String>,
    pub donor_email: Option<String>,
    pub payment_method: Option<String>,
    pub status: Option<DonationStatus>,
    pub currency: Option<String>,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub manual_entry: Option<bool>,
}

/// The wire payload for a remote insert: domain fields only. The local id
/// and the `synced` flag stay local; the remote datastore assigns its own
/// identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDonation {
    pub organization_id: String,
    pub amount: f64,
    pub currency: String,
    pub donor_name: Option<String>,
    pub donor_phone: Option<String>,
    pub donor_email: Option<String>,
    pub payment_method: Option<String>,
    pub status: DonationStatus,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub manual_entry: bool,
}

impl From<&DonationRecord> for NewDonation {
    fn from(record: &DonationRecord) -> Self {
        Self {
            organization_id: record.organization_id.to_string(),
            amount: record.amount,
            currency: record.currency.clone(),
            donor_name: record.donor_name.clone(),
            donor_phone: record.donor_phone.clone(),
            donor_email: record.donor_email.clone(),
            payment_method: record.payment_method.clone(),
            status: record.status,
            date: record.date,
            notes: record.notes.clone(),
            manual_entry: record.manual_entry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            DonationStatus::Pending,
            DonationStatus::Completed,
            DonationStatus::Failed,
            DonationStatus::Refunded,
        ] {
            assert_eq!(status.as_str().parse::<DonationStatus>(), Ok(status));
        }
        assert!("cancelled".parse::<DonationStatus>().is_err());
    }

    #[test]
    fn wire_payload_drops_local_identity() {
        let record = DonationRecord {
            id: "offline-1736500000000-abc123def".to_string(),
            organization_id: OrganizationId::new("org-1".into()).unwrap(),
            amount: 500.0,
            currency: "PKR".to_string(),
            donor_name: Some("Bilal".to_string()),
            donor_phone: None,
            donor_email: None,
            payment_method: None,
            status: DonationStatus::Completed,
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            notes: None,
            manual_entry: true,
            synced: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let payload = NewDonation::from(&record);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("synced").is_none());
        assert_eq!(json["organization_id"], "org-1");
    }
}
