use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use donation_ledger::{
    ConnectionPool, ConnectivityMonitor, DonationDraft, DonationRecord, EntryService,
    ExpenseRecord, LedgerStore, NewDonation, NewExpense, OrganizationId, ReconciliationService,
    RemoteError, RemoteLedger, SqliteLedgerStore, SyncOrchestrator,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

struct ToggleConnectivity {
    online: AtomicBool,
}

impl ToggleConnectivity {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            online: AtomicBool::new(false),
        })
    }
}

impl ConnectivityMonitor for ToggleConnectivity {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
struct AcceptingRemote {
    donations: Mutex<Vec<NewDonation>>,
    expenses: Mutex<Vec<NewExpense>>,
}

#[async_trait]
impl RemoteLedger for AcceptingRemote {
    async fn insert_donation(&self, donation: &NewDonation) -> Result<(), RemoteError> {
        self.donations.lock().unwrap().push(donation.clone());
        Ok(())
    }

    async fn insert_expense(&self, expense: &NewExpense) -> Result<(), RemoteError> {
        self.expenses.lock().unwrap().push(expense.clone());
        Ok(())
    }

    async fn fetch_donations(
        &self,
        _organization_id: &OrganizationId,
    ) -> Result<Vec<DonationRecord>, RemoteError> {
        Ok(Vec::new())
    }

    async fn fetch_expenses(
        &self,
        _organization_id: &OrganizationId,
    ) -> Result<Vec<ExpenseRecord>, RemoteError> {
        Ok(Vec::new())
    }
}

fn org(id: &str) -> OrganizationId {
    OrganizationId::new(id.to_string()).unwrap()
}

/// Full offline-write → reconnect → reconcile round trip.
#[tokio::test]
async fn offline_donation_syncs_after_reconnect() {
    let pool = ConnectionPool::in_memory().await.unwrap();
    pool.migrate().await.unwrap();
    let store: Arc<dyn LedgerStore> = Arc::new(SqliteLedgerStore::new(pool.pool().clone()));
    let remote = Arc::new(AcceptingRemote::default());
    let connectivity = ToggleConnectivity::new();

    let entries = EntryService::new(store.clone(), "PKR");
    let engine = Arc::new(ReconciliationService::new(store.clone(), remote.clone()));
    let orchestrator = Arc::new(SyncOrchestrator::new(engine, connectivity.clone()));

    // Offline: the submission still lands durably with a local id.
    let submitted_at = Utc::now();
    let id = entries
        .save_donation_offline(
            org("org-1"),
            DonationDraft {
                amount: 500.0,
                date: Some(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let records = entries.donations_for_organization(&org("org-1")).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].amount, 500.0);
    assert_eq!(records[0].date.to_string(), "2026-01-10");
    assert!(!records[0].synced);

    // Back online: the connectivity-regained event drives the sync.
    connectivity.online.store(true, Ordering::SeqCst);
    orchestrator.handle_online().await;

    let records = entries.donations_for_organization(&org("org-1")).await.unwrap();
    assert!(records[0].synced);

    let status = orchestrator.status();
    assert_eq!(status.pending_count, 0);
    assert!(status.error.is_none());
    assert!(status.last_sync_time.expect("last sync time") >= submitted_at);

    let pushed = remote.donations.lock().unwrap();
    assert_eq!(pushed.len(), 1);
    assert_eq!(pushed[0].organization_id, "org-1");
}

/// Opening a database written at schema version 1 upgrades it in place and
/// keeps the existing rows.
#[tokio::test]
async fn schema_upgrade_preserves_version_one_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.db");
    let url = format!("sqlite:{}", path.display());

    // Seed a version-1 database by hand: initial tables, no migration
    // bookkeeping, one donation row.
    let pool = ConnectionPool::new(&url, 1).await.unwrap();
    sqlx::raw_sql(include_str!("../migrations/0001_create_ledger_tables.sql"))
        .execute(pool.pool())
        .await
        .unwrap();
    sqlx::query(
        r#"
        INSERT INTO donations (
            id, organization_id, amount, currency, status, date,
            manual_entry, synced, created_at, updated_at
        ) VALUES ('offline-1736500000000-abc123def', 'org-1', 750.0, 'PKR',
                  'completed', '2026-01-09', 1, 0, ?1, ?1)
        "#,
    )
    .bind(Utc::now().timestamp_millis())
    .execute(pool.pool())
    .await
    .unwrap();
    pool.close().await;

    // Reopen through the migrator: the upgrade to the current version must
    // not lose the row.
    let pool = ConnectionPool::new(&url, 1).await.unwrap();
    pool.migrate().await.unwrap();
    let store = SqliteLedgerStore::new(pool.pool().clone());

    let records = store.donations_by_organization(&org("org-1")).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].amount, 750.0);
    assert!(!records[0].synced);
    assert_eq!(store.count_unsynced().await.unwrap(), 1);
}
