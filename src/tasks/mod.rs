//! Background Tasks Module
//!
//! Contains background tasks owned by long-lived components.
//!
//! # Tasks
//! - Cache reaper: evicts stale cache entries once per TTL

mod reaper;

pub use reaper::{Reaper, MAX_REAP_INTERVAL, MIN_REAP_INTERVAL};
