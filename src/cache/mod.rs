//! Cache Module
//!
//! In-memory response cache with a single fixed TTL and background reaping.

mod entry;
mod handle;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default entry lifetime, also the reaper's sweep period.
pub const DEFAULT_TTL_MS: u64 = 5_000;
