pub mod local_record_id;
pub mod organization_id;
pub mod record_kind;

pub use organization_id::OrganizationId;
pub use record_kind::RecordKind;
