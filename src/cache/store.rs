//! Cache Store Module
//!
//! The unsynchronised map behind the response cache. Callers share it through
//! [`Cache`](crate::cache::Cache), which wraps it in a single mutex.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// URL-keyed payload storage with a single TTL shared by every entry.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lifetime of every entry
    ttl: Duration,
    /// Lookup statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Inserts or replaces the entry for `key`, stamped with the current instant.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        self.put_at(key, value, Instant::now());
    }

    /// Inserts or replaces the entry for `key`, stamped with `now`.
    pub fn put_at(&mut self, key: String, value: Vec<u8>, now: Instant) {
        self.entries.insert(key, CacheEntry::created_at_instant(value, now));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the live payload for `key`.
    ///
    /// An entry that has outlived the TTL is removed and reported as a miss,
    /// even if the reaper has not reached it yet. Lookups never refresh an
    /// entry's creation time.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        self.get_at(key, Instant::now())
    }

    /// Like [`get`](Self::get), judging expiry against `now`.
    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<Vec<u8>> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired(self.ttl, now) {
            self.entries.remove(key);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_expired();
            self.stats.record_miss();
            return None;
        }

        let value = entry.value().to_vec();
        self.stats.record_hit();
        Some(value)
    }

    // == Reap Expired ==
    /// Removes every entry whose `created_at + ttl` is strictly before `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_reapable(ttl, now));
        let removed = before - self.entries.len();

        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Lifetime shared by every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries physically present, including ones awaiting the reaper.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
