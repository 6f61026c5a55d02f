//! Cache Statistics Module
//!
//! Tracks how well the response cache is deduplicating requests.

// == Cache Stats ==
/// Counters for cache lookups and removals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that found no live entry
    pub misses: u64,
    /// Entries dropped on read because they had outlived the TTL
    pub expired: u64,
    /// Entries removed by the background reaper
    pub reaped: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Recorders ==
    /// Counts a lookup served from the cache.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Counts a lookup that found no live entry.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Counts an entry dropped on read after outliving the TTL.
    pub fn record_expired(&mut self) {
        self.expired += 1;
    }

    /// Adds the number of entries removed by one reaper sweep.
    pub fn record_reaped(&mut self, count: usize) {
        self.reaped += count as u64;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
