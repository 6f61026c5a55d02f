//! Cache Reaper Task
//!
//! Background task that periodically evicts stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Shortest sweep period; `tokio::time::interval` rejects a zero period.
pub const MIN_REAP_INTERVAL: Duration = Duration::from_millis(1);

/// Longest sweep period. Longer TTLs still sweep daily; entries whose
/// deadline overflows the clock are never reapable anyway.
pub const MAX_REAP_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

// == Reaper ==
/// Handle to a running sweep task.
///
/// Each tick the task takes the store lock once and removes every entry whose
/// `created_at + ttl` lies strictly before the current instant. The task runs
/// until [`stop`](Self::stop) is called or the handle is dropped, in which
/// case it is aborted.
#[derive(Debug)]
pub struct Reaper {
    /// Flipped to `true` to ask the task to exit
    shutdown: watch::Sender<bool>,
    /// Taken by the first `stop` call
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Reaper {
    /// Spawns the sweep task on the current Tokio runtime.
    ///
    /// The first sweep happens one `interval` after spawning.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn spawn(store: Arc<Mutex<CacheStore>>, interval: Duration) -> Self {
        let interval = interval.clamp(MIN_REAP_INTERVAL, MAX_REAP_INTERVAL);
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            info!("Starting cache reaper with interval of {:?}", interval);

            let now = Instant::now();
            let start = now.checked_add(interval).unwrap_or(now);
            let mut ticker = tokio::time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = shutdown_rx.changed() => break,
                }

                // One critical section for the whole scan-and-delete pass
                let removed = {
                    let mut store_guard = store.lock().await;
                    store_guard.reap_expired(Instant::now())
                };

                if removed > 0 {
                    info!("Cache reaper: removed {} expired entries", removed);
                } else {
                    debug!("Cache reaper: no expired entries found");
                }
            }

            debug!("Cache reaper stopped");
        });

        Self {
            shutdown,
            handle: Mutex::new(Some(handle)),
        }
    }

    // == Stop ==
    /// Signals the task to exit after its current sweep and waits for it.
    ///
    /// Concurrent callers all wait for the same exit: the handle lock is held
    /// across the join, so no call returns while the task is still sweeping.
    pub async fn stop(&self) {
        self.shutdown.send_replace(true);

        let mut handle_guard = self.handle.lock().await;
        if let Some(handle) = handle_guard.as_mut() {
            if let Err(err) = handle.await {
                warn!("Cache reaper ended abnormally: {}", err);
            }
        }
        handle_guard.take();
    }

    /// Returns true until the task has been joined by [`stop`](Self::stop).
    pub async fn is_running(&self) -> bool {
        match self.handle.lock().await.as_ref() {
            Some(handle) => !handle.is_finished(),
            None => false,
        }
    }
}

impl Drop for Reaper {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.get_mut().take() {
            handle.abort();
        }
    }
}
