use crate::application::ports::{LedgerStore, RemoteLedger};
use crate::domain::value_objects::OrganizationId;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Mirror pass: pulls an organization's remote records into the local store
/// so the dashboard keeps working offline. Mirrored rows are server truth
/// and land with `synced = true`; locally-minted pending records keep their
/// own `offline-…` ids and are never overwritten by this pass.
pub struct CacheService {
    store: Arc<dyn LedgerStore>,
    remote: Arc<dyn RemoteLedger>,
}

impl CacheService {
    pub fn new(store: Arc<dyn LedgerStore>, remote: Arc<dyn RemoteLedger>) -> Self {
        Self { store, remote }
    }

    pub async fn cache_organization_data(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<(), AppError> {
        let donations = self.remote.fetch_donations(organization_id).await?;
        let expenses = self.remote.fetch_expenses(organization_id).await?;

        for mut donation in donations {
            donation.synced = true;
            self.store.put_donation(&donation).await?;
        }
        for mut expense in expenses {
            expense.synced = true;
            self.store.put_expense(&expense).await?;
        }

        tracing::debug!(organization = %organization_id, "cached remote ledger data");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RemoteError;
    use crate::application::services::EntryService;
    use crate::domain::entities::{
        DonationDraft, DonationRecord, DonationStatus, ExpenseRecord, NewDonation, NewExpense,
    };
    use crate::infrastructure::database::{ConnectionPool, SqliteLedgerStore};
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};

    struct FixedRemote {
        donations: Vec<DonationRecord>,
        fail: bool,
    }

    #[async_trait]
    impl RemoteLedger for FixedRemote {
        async fn insert_donation(&self, _donation: &NewDonation) -> Result<(), RemoteError> {
            Ok(())
        }

        async fn insert_expense(&self, _expense: &NewExpense) -> Result<(), RemoteError> {
            Ok(())
        }

        async fn fetch_donations(
            &self,
            _organization_id: &OrganizationId,
        ) -> Result<Vec<DonationRecord>, RemoteError> {
            if self.fail {
                return Err(RemoteError::Transport("connection reset".to_string()));
            }
            Ok(self.donations.clone())
        }

        async fn fetch_expenses(
            &self,
            _organization_id: &OrganizationId,
        ) -> Result<Vec<ExpenseRecord>, RemoteError> {
            if self.fail {
                return Err(RemoteError::Transport("connection reset".to_string()));
            }
            Ok(Vec::new())
        }
    }

    fn org(id: &str) -> OrganizationId {
        OrganizationId::new(id.to_string()).unwrap()
    }

    fn remote_donation(id: &str) -> DonationRecord {
        DonationRecord {
            id: id.to_string(),
            organization_id: org("org-1"),
            amount: 1000.0,
            currency: "PKR".to_string(),
            donor_name: Some("Ayesha".to_string()),
            donor_phone: None,
            donor_email: None,
            payment_method: Some("raast".to_string()),
            status: DonationStatus::Completed,
            date: NaiveDate::from_ymd_opt(2026, 1, 8).unwrap(),
            notes: None,
            manual_entry: false,
            synced: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn setup(remote: FixedRemote) -> (CacheService, EntryService, Arc<dyn LedgerStore>) {
        let pool = ConnectionPool::in_memory().await.unwrap();
        pool.migrate().await.unwrap();
        let store: Arc<dyn LedgerStore> =
            Arc::new(SqliteLedgerStore::new(pool.pool().clone()));
        let remote = Arc::new(remote);
        (
            CacheService::new(store.clone(), remote),
            EntryService::new(store.clone(), "PKR"),
            store,
        )
    }

    #[tokio::test]
    async fn mirrored_records_arrive_marked_synced() {
        let (cache, _entries, store) = setup(FixedRemote {
            donations: vec![remote_donation("srv-1"), remote_donation("srv-2")],
            fail: false,
        })
        .await;

        cache.cache_organization_data(&org("org-1")).await.unwrap();

        let stored = store.donations_by_organization(&org("org-1")).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|d| d.synced));
        assert_eq!(store.count_unsynced().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn mirror_pass_leaves_pending_local_records_alone() {
        let (cache, entries, store) = setup(FixedRemote {
            donations: vec![remote_donation("srv-1")],
            fail: false,
        })
        .await;

        entries
            .save_donation_offline(
                org("org-1"),
                DonationDraft {
                    amount: 500.0,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        cache.cache_organization_data(&org("org-1")).await.unwrap();

        let stored = store.donations_by_organization(&org("org-1")).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(store.count_unsynced().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_surfaces_as_remote_error() {
        let (cache, _entries, store) = setup(FixedRemote {
            donations: Vec::new(),
            fail: true,
        })
        .await;

        let err = cache
            .cache_organization_data(&org("org-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Remote(_)));
        assert!(store
            .donations_by_organization(&org("org-1"))
            .await
            .unwrap()
            .is_empty());
    }
}
