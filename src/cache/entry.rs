//! Cache Entry Module
//!
//! Defines a single cached response payload and its creation time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload together with the instant it was stored.
///
/// Entries are never mutated in place: an overwrite replaces the whole entry,
/// which is the only way `created_at` can move forward.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    value: Vec<u8>,
    /// Insertion instant (monotonic)
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self::created_at_instant(value, Instant::now())
    }

    /// Creates a new entry stamped with the given instant.
    pub fn created_at_instant(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Accessors ==
    /// Returns the stored payload.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the instant this entry was stored.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Age ==
    /// Time elapsed between creation and `now`, zero if `now` is earlier.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Read-side staleness check.
    ///
    /// Boundary condition: an entry whose age equals `ttl` is already expired,
    /// so a lookup never hands out a payload that has lived a full TTL.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) >= ttl
    }

    // == Is Reapable ==
    /// Sweep-side staleness check: `created_at + ttl` is strictly before `now`.
    ///
    /// An entry stored at exactly `now` is never reaped by a sweep at `now`.
    pub fn is_reapable(&self, ttl: Duration, now: Instant) -> bool {
        match self.created_at.checked_add(ttl) {
            Some(deadline) => deadline < now,
            None => false,
        }
    }
}
