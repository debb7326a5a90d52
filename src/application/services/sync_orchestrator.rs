use crate::application::ports::ConnectivityMonitor;
use crate::application::services::ReconciliationService;
use crate::domain::entities::SyncStatus;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

pub type SyncListener = Arc<dyn Fn(&SyncStatus) + Send + Sync>;

struct ObserverRegistry {
    status: SyncStatus,
    listeners: HashMap<u64, SyncListener>,
    next_listener_id: u64,
}

/// Decides when reconciliation runs, prevents overlapping runs and publishes
/// status to observers.
///
/// The `is_syncing` flag inside the registry lock is the sole concurrency
/// guard: `sync_now` is not reentrant, and a call arriving while another is
/// in flight is dropped, not queued. A write landing during an in-flight
/// sync is therefore picked up by the next cycle.
pub struct SyncOrchestrator {
    engine: Arc<ReconciliationService>,
    connectivity: Arc<dyn ConnectivityMonitor>,
    registry: Arc<Mutex<ObserverRegistry>>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl SyncOrchestrator {
    pub fn new(
        engine: Arc<ReconciliationService>,
        connectivity: Arc<dyn ConnectivityMonitor>,
    ) -> Self {
        Self {
            engine,
            connectivity,
            registry: Arc::new(Mutex::new(ObserverRegistry {
                status: SyncStatus::default(),
                listeners: HashMap::new(),
                next_listener_id: 0,
            })),
            timer: Mutex::new(None),
        }
    }

    fn lock_registry(&self) -> MutexGuard<'_, ObserverRegistry> {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn status(&self) -> SyncStatus {
        self.lock_registry().status.clone()
    }

    /// Listeners run without the registry lock held, so a callback may
    /// subscribe or drop subscriptions, including its own.
    fn notify_observers(&self) {
        let (status, listeners) = {
            let registry = self.lock_registry();
            let listeners: Vec<SyncListener> = registry.listeners.values().cloned().collect();
            (registry.status.clone(), listeners)
        };
        for listener in &listeners {
            listener(&status);
        }
    }

    /// Run one reconciliation cycle now. Returns `true` when the cycle ran
    /// and every pending record synced; `false` is a no-op signal (offline,
    /// already syncing) or a cycle with failures, both left for the next
    /// attempt. Never an error: pass-level failures land in `status.error`.
    pub async fn sync_now(&self) -> bool {
        if !self.connectivity.is_online() {
            tracing::debug!("sync skipped: offline");
            return false;
        }

        {
            let mut registry = self.lock_registry();
            if registry.status.is_syncing {
                tracing::debug!("sync skipped: already in flight");
                return false;
            }
            registry.status.is_syncing = true;
            registry.status.error = None;
        }
        self.notify_observers();

        let outcome = self.engine.push_all().await;
        let pending = self.engine.pending_count().await;

        let mut clean = false;
        {
            let mut registry = self.lock_registry();
            match outcome {
                Ok(outcome) => {
                    if outcome.total_success() > 0 {
                        registry.status.last_sync_time = Some(Utc::now());
                    }
                    if outcome.total_failed() > 0 {
                        registry.status.error =
                            Some(format!("{} items failed to sync", outcome.total_failed()));
                    } else {
                        clean = true;
                    }
                    tracing::info!(
                        success = outcome.total_success(),
                        failed = outcome.total_failed(),
                        "sync cycle finished"
                    );
                }
                Err(err) => {
                    tracing::error!(error = %err, "sync cycle failed");
                    registry.status.error = Some(err.to_string());
                }
            }
            // On a failed recompute the pending count keeps its last-known
            // value.
            if let Ok(count) = pending {
                registry.status.pending_count = count;
            }
            registry.status.is_syncing = false;
        }
        self.notify_observers();

        clean
    }

    /// Recompute `pending_count` from the store and notify observers.
    pub async fn refresh_pending_count(&self) {
        match self.engine.pending_count().await {
            Ok(count) => {
                {
                    let mut registry = self.lock_registry();
                    registry.status.pending_count = count;
                }
                self.notify_observers();
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to refresh pending count");
            }
        }
    }

    /// Start the periodic sync timer, replacing any previous one. Every tick
    /// (including an immediate first one) attempts a sync while online with
    /// records pending.
    pub fn start_auto_sync(self: Arc<Self>, interval_minutes: u64) {
        self.stop_auto_sync();

        // The task holds a Weak handle so a dropped orchestrator ends the
        // loop instead of being kept alive by its own timer.
        let orchestrator = Arc::downgrade(&self);
        let handle = tokio::spawn(async move {
            let period = Duration::from_secs(interval_minutes.max(1) * 60);
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let Some(orchestrator) = orchestrator.upgrade() else {
                    break;
                };
                orchestrator.refresh_pending_count().await;
                if orchestrator.connectivity.is_online()
                    && orchestrator.status().pending_count > 0
                {
                    orchestrator.sync_now().await;
                }
            }
        });

        let mut timer = self
            .timer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *timer = Some(handle);
    }

    /// Cancel the periodic timer. Idempotent.
    pub fn stop_auto_sync(&self) {
        let mut timer = self
            .timer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handle) = timer.take() {
            handle.abort();
        }
    }

    /// Register an observer. The listener fires synchronously with the
    /// current status right away, then on every status change, until the
    /// returned subscription is dropped. Subscribers are independent.
    pub fn subscribe(
        &self,
        listener: impl Fn(&SyncStatus) + Send + Sync + 'static,
    ) -> SyncSubscription {
        let listener: SyncListener = Arc::new(listener);
        let (id, snapshot) = {
            let mut registry = self.lock_registry();
            let id = registry.next_listener_id;
            registry.next_listener_id += 1;
            registry.listeners.insert(id, Arc::clone(&listener));
            (id, registry.status.clone())
        };
        listener(&snapshot);
        SyncSubscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Wire this to the runtime's "became online" event.
    pub async fn handle_online(&self) {
        tracing::info!("connectivity regained, attempting sync");
        self.sync_now().await;
    }

    /// Wire this to the runtime's "became offline" event.
    pub fn handle_offline(&self) {
        {
            let mut registry = self.lock_registry();
            registry.status.is_syncing = false;
        }
        self.notify_observers();
    }
}

impl Drop for SyncOrchestrator {
    fn drop(&mut self) {
        self.stop_auto_sync();
    }
}

/// Observer handle; dropping it (or calling `unsubscribe`) removes the
/// listener without affecting other subscribers.
pub struct SyncSubscription {
    registry: Weak<Mutex<ObserverRegistry>>,
    id: u64,
}

impl SyncSubscription {
    pub fn unsubscribe(self) {}
}

impl Drop for SyncSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            registry.listeners.remove(&self.id);
        }
    }
}
