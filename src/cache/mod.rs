//! Cache Module
//!
//! In-memory response cache keyed by request URL with time-based expiry.

mod entry;
mod shared;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::ResponseCache;
pub use store::CacheStore;

use std::time::Duration;

// == Public Constants ==
/// Default lifetime of a cached response
pub const DEFAULT_TTL_SECS: u64 = 5 * 60;

/// Longest accepted TTL or sweep interval (30 years)
pub const MAX_DURATION: Duration = Duration::from_secs(30 * 365 * 24 * 60 * 60);

/// Returns true if `duration` is usable as a TTL or sweep interval.
pub(crate) fn is_valid_duration(duration: Duration) -> bool {
    !duration.is_zero() && duration <= MAX_DURATION
}
