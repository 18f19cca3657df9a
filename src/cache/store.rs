//! Cache Store Module
//!
//! Unlocked map of request URL to cached response body. Locking and the
//! background sweep live in [`ResponseCache`](super::ResponseCache).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{is_valid_duration, CacheEntry};
use crate::error::{PokedexError, Result};

// == Cache Store ==
/// Response bodies keyed by the exact request URL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Age at which an entry becomes eligible for removal
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    ///
    /// A zero `ttl`, or one longer than [`MAX_DURATION`](crate::cache::MAX_DURATION),
    /// is rejected with [`PokedexError::InvalidDuration`].
    pub fn new(ttl: Duration) -> Result<Self> {
        if !is_valid_duration(ttl) {
            return Err(PokedexError::InvalidDuration(ttl));
        }

        Ok(Self {
            entries: HashMap::new(),
            ttl,
        })
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// Overwriting resets the entry's age to zero. Keys are used verbatim;
    /// the empty string is a valid key.
    pub fn add(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.entries.insert(key.into(), CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`.
    ///
    /// No age check happens here: an entry past its TTL is still returned
    /// until a sweep removes it.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value().to_vec())
    }

    // == Remove Expired ==
    /// Removes every entry whose age at `now` is at least the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired_at(ttl, now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
