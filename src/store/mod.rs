//! Local key/value store standing in for a real backend.
//!
//! Every value is a JSON-encoded blob under a string key: the four record
//! collections, the seed flag, the session user, and the reminder settings.
//! The store is shared process-wide as a [`StorePool`] and simulates a slow
//! backend by sleeping a configurable latency at the end of every facade
//! operation.

/// The key/value store itself, with disk and in-memory backends
pub mod local;
/// One-time demo dataset written into an empty store
pub mod seed;

pub use local::LocalStore;

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, instrument};

use crate::config::AppConfig;
use crate::errors::Result;

/// Shared handle to the process-wide store.
pub type StorePool = Arc<Mutex<LocalStore>>;

/// The four persisted record collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Expenses,
    Investments,
    Goals,
    Reminders,
}

impl Collection {
    /// Storage key the collection's JSON array lives under.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Expenses => "expenses",
            Self::Investments => "investments",
            Self::Goals => "goals",
            Self::Reminders => "reminders",
        }
    }

    /// Singular name used in error messages.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Expenses => "expense",
            Self::Investments => "investment",
            Self::Goals => "goal",
            Self::Reminders => "reminder",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.singular())
    }
}

/// Opens the configured on-disk store and seeds demo data on first run.
#[instrument(skip(config))]
pub async fn init_store(config: &AppConfig) -> Result<StorePool> {
    debug!("Opening local store at: {:?}", config.data_dir);
    let mut store = LocalStore::open(&config.data_dir, config.latency())?;
    seed::seed_demo_data(&mut store);
    Ok(Arc::new(Mutex::new(store)))
}

/// Locks the store, recovering the guard if a previous holder panicked.
/// The store holds plain data, so a poisoned lock is still usable.
pub(crate) fn lock_store(pool: &StorePool) -> MutexGuard<'_, LocalStore> {
    match pool.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Sleeps the store's configured latency, pretending to wait on a backend.
/// Called by every facade operation after its work is done.
pub(crate) async fn simulate_latency(pool: &StorePool) {
    let latency = lock_store(pool).latency();
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
