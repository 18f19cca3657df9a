//! Cache Entry Module
//!
//! Defines a single cached response body and the instant it was stored.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cached response body with its insertion time.
///
/// Entries are never mutated; a re-add replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw, undecoded response body
    value: Vec<u8>,
    /// When the entry was stored (monotonic clock)
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit insertion instant.
    pub fn with_created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    /// Returns the stored bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion instant.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry's age has reached `ttl`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is
    /// expired.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) >= ttl
    }
}
