pub mod cache_service;
pub mod entry_service;
pub mod reconciliation_service;
pub mod sync_orchestrator;

pub use cache_service::CacheService;
pub use entry_service::EntryService;
pub use reconciliation_service::ReconciliationService;
pub use sync_orchestrator::{SyncOrchestrator, SyncSubscription};
