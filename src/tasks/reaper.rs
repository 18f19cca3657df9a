//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::ResponseCache;

// == Reaper Handle ==
/// Stop handle for a running reaper.
///
/// Dropping the handle leaves the reaper running until the runtime shuts
/// down; call [`ReaperHandle::shutdown`] for an orderly stop.
#[derive(Debug)]
pub struct ReaperHandle {
    stop: Arc<Notify>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the reaper to stop and waits for it to exit.
    ///
    /// A sweep already in progress completes first.
    pub async fn shutdown(self) {
        self.stop.notify_one();
        if let Err(e) = self.task.await {
            if !e.is_cancelled() {
                warn!("Cache reaper exited abnormally: {}", e);
            }
        }
    }

    /// Cancels the reaper without waiting.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Returns true once the reaper task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns a background task that sweeps `cache` every `period`.
///
/// Ticks are scheduled on a fixed period starting one `period` after the
/// call, so sweep duration does not accumulate into drift.
///
/// # Example
/// ```ignore
/// let (cache, reaper) = ResponseCache::new(Duration::from_secs(300))?;
/// // Later, during shutdown:
/// reaper.shutdown().await;
/// ```
pub fn spawn_reaper(cache: ResponseCache, period: Duration) -> ReaperHandle {
    let stop = Arc::new(Notify::new());
    let stop_signal = stop.clone();

    let task = tokio::spawn(async move {
        info!("Starting cache reaper with a period of {:?}", period);

        let mut ticker = time::interval_at(time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = cache.sweep().await;
                    if removed > 0 {
                        info!("Cache sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Cache sweep: no expired entries found");
                    }
                }
                _ = stop_signal.notified() => {
                    info!("Cache reaper stopped");
                    break;
                }
            }
        }
    });

    ReaperHandle { stop, task }
}
