//! Shared Response Cache
//!
//! Wraps a [`CacheStore`] in a single async mutex and ties a background
//! reaper to its construction.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::cache::{is_valid_duration, CacheStore};
use crate::error::{PokedexError, Result};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Response Cache ==
/// Cloneable, thread-safe handle to the response cache.
///
/// Every clone points at the same store. The lock is held for exactly one
/// add, one get, or one sweep.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: Arc<Mutex<CacheStore>>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current runtime.
    ///
    /// The reaper sweeps once per `ttl`, so an entry may survive up to twice
    /// its TTL. Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Result<(Self, ReaperHandle)> {
        Self::with_sweep_interval(ttl, ttl)
    }

    /// Like [`ResponseCache::new`] but sweeps every `sweep_interval` instead
    /// of every `ttl`.
    ///
    /// Both durations must be non-zero and at most
    /// [`MAX_DURATION`](crate::cache::MAX_DURATION).
    pub fn with_sweep_interval(
        ttl: Duration,
        sweep_interval: Duration,
    ) -> Result<(Self, ReaperHandle)> {
        if !is_valid_duration(sweep_interval) {
            return Err(PokedexError::InvalidDuration(sweep_interval));
        }

        let cache = Self {
            store: Arc::new(Mutex::new(CacheStore::new(ttl)?)),
        };
        let reaper = spawn_reaper(cache.clone(), sweep_interval);

        Ok((cache, reaper))
    }

    // == Add ==
    /// Stores the raw body under `key`, resetting its age.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns a copy of the body stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    /// Returns the number of entries currently held.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns true if no entries are held.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Sweep ==
    /// Removes every expired entry in one locked pass.
    ///
    /// Returns the number of entries removed.
    pub(crate) async fn sweep(&self) -> usize {
        let mut store = self.store.lock().await;
        store.remove_expired(Instant::now())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MAX_DURATION;

    #[tokio::test]
    async fn test_cache_rejects_zero_ttl() {
        let result = ResponseCache::new(Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::InvalidDuration(_))));
    }

    #[tokio::test]
    async fn test_cache_rejects_zero_sweep_interval() {
        let result = ResponseCache::with_sweep_interval(Duration::from_secs(1), Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::InvalidDuration(_))));
    }

    #[tokio::test]
    async fn test_cache_rejects_unrepresentable_durations() {
        let huge = Duration::from_secs(u64::MAX);

        let result = ResponseCache::new(huge);
        assert!(matches!(result, Err(PokedexError::InvalidDuration(_))));

        let result = ResponseCache::with_sweep_interval(Duration::from_secs(300), huge);
        assert!(matches!(result, Err(PokedexError::InvalidDuration(_))));
    }

    #[tokio::test]
    async fn test_reaper_survives_longest_accepted_period() {
        let (cache, reaper) = ResponseCache::new(MAX_DURATION).unwrap();

        cache.add("key", b"value".to_vec()).await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!reaper.is_finished(), "Reaper should still be running");
        assert_eq!(cache.get("key").await, Some(b"value".to_vec()));

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_starts_empty() {
        let (cache, reaper) = ResponseCache::new(Duration::from_secs(300)).unwrap();

        assert!(cache.is_empty().await);
        assert_eq!(cache.get("https://example/a").await, None);

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let (cache, reaper) = ResponseCache::new(Duration::from_secs(300)).unwrap();
        let other = cache.clone();

        cache.add("https://example/a", b"x".to_vec()).await;

        assert_eq!(other.get("https://example/a").await, Some(b"x".to_vec()));
        assert_eq!(other.len().await, 1);

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_hit_then_expiry_scenario() {
        let (cache, reaper) = ResponseCache::new(Duration::from_millis(100)).unwrap();

        cache.add("https://example/a", b"x".to_vec()).await;
        assert_eq!(cache.get("https://example/a").await, Some(b"x".to_vec()));

        tokio::time::sleep(Duration::from_millis(250)).await;

        assert_eq!(cache.get("https://example/a").await, None);

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_overwrite_resets_age() {
        let (cache, reaper) = ResponseCache::new(Duration::from_millis(300)).unwrap();

        cache.add("key", b"v1".to_vec()).await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        cache.add("key", b"v2".to_vec()).await;

        // First sweep runs at ~300ms; v1 would have been due, v2 is ~100ms old
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(cache.get("key").await, Some(b"v2".to_vec()));

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_decoupled_sweep_interval() {
        let (cache, reaper) = ResponseCache::with_sweep_interval(
            Duration::from_millis(50),
            Duration::from_millis(20),
        )
        .unwrap();

        cache.add("key", b"v".to_vec()).await;
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(cache.is_empty().await);

        reaper.shutdown().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_add_get_during_sweeps() {
        let (cache, reaper) = ResponseCache::new(Duration::from_millis(10)).unwrap();

        let mut tasks = Vec::new();
        for worker in 0..8u8 {
            let cache = cache.clone();
            tasks.push(tokio::spawn(async move {
                for i in 0..200u32 {
                    // Even workers share keys, odd workers use their own
                    let key = if worker % 2 == 0 {
                        format!("shared-{}", i % 10)
                    } else {
                        format!("own-{}-{}", worker, i % 10)
                    };
                    let value = vec![worker; 64];
                    cache.add(key.clone(), value).await;

                    if let Some(bytes) = cache.get(&key).await {
                        // A full value written by exactly one worker
                        assert_eq!(bytes.len(), 64);
                        assert!(bytes.iter().all(|b| *b == bytes[0]));
                    }
                    if i % 50 == 0 {
                        tokio::time::sleep(Duration::from_millis(5)).await;
                    }
                }
            }));
        }

        for task in tasks {
            task.await.expect("worker should not panic");
        }

        reaper.shutdown().await;
    }
}
