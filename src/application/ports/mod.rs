pub mod connectivity;
pub mod ledger_store;
pub mod remote_ledger;

pub use connectivity::ConnectivityMonitor;
pub use ledger_store::LedgerStore;
pub use remote_ledger::{RemoteError, RemoteLedger};
