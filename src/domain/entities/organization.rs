use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cache mirror of an organization row owned by the remote datastore.
/// Organization lifecycle is external; the local store only keeps a copy so
/// the dashboard works offline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub raast_id: Option<String>,
    pub bank_account: Option<String>,
    pub easypaisa_account: Option<String>,
    pub jazzcash_account: Option<String>,
    pub synced: bool,
    pub last_synced: Option<DateTime<Utc>>,
}
