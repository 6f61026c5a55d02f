//! Shared Cache Handle
//!
//! The thread-safe face of the response cache: one [`CacheStore`] behind a
//! single mutex, plus the [`Reaper`] that sweeps it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::Reaper;

// == Cache ==
/// Cloneable handle to a TTL cache instance.
///
/// Clones share the same entries and reaper. Every operation is total: a
/// lookup that finds nothing live is a miss, never an error. The reaper is
/// aborted when the last clone is dropped, or joined by [`close`](Self::close).
#[derive(Debug, Clone)]
pub struct Cache {
    /// Single lock scoped to the whole store
    store: Arc<Mutex<CacheStore>>,
    reaper: Arc<Reaper>,
    /// Fixed at construction
    ttl: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper, sweeping every `ttl`.
    ///
    /// Instances are independent; several may coexist with different TTLs.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let reaper = Reaper::spawn(store.clone(), ttl);
        debug!("Created cache with ttl {:?}", ttl);

        Self {
            store,
            reaper: Arc::new(reaper),
            ttl,
        }
    }

    // == Put ==
    /// Inserts or replaces the payload for `key` with a fresh timestamp.
    pub async fn put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        self.store.lock().await.put(key, value);
    }

    // == Get ==
    /// Returns the payload for `key` if a live entry exists.
    ///
    /// This is a local lookup only. Entries whose age has reached the TTL are
    /// treated as misses even before the reaper removes them.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Close ==
    /// Stops the reaper after its current sweep and waits for it to exit.
    ///
    /// Entries stay readable afterwards, but nothing sweeps them any more.
    pub async fn close(&self) {
        self.reaper.stop().await;
        debug!("Cache closed");
    }

    /// Returns a snapshot of the lookup statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    /// Number of entries physically present, including ones awaiting the reaper.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns true if no entries are physically present.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Lifetime shared by every entry, also the reaper's sweep period.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns true while the reaper task is alive.
    pub async fn is_reaping(&self) -> bool {
        self.reaper.is_running().await
    }
}
