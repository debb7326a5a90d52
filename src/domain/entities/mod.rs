pub mod donation;
pub mod expense;
pub mod organization;
pub mod sync;

pub use donation::{DonationDraft, DonationRecord, DonationStatus, NewDonation};
pub use expense::{ExpenseDraft, ExpenseRecord, NewExpense};
pub use organization::Organization;
pub use sync::{KindOutcome, SyncOutcome, SyncStatus};
