//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables,
//! with command-line overrides applied on top.

use std::env;
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;
use crate::cache::DEFAULT_TTL_SECS;

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime of a cached response in seconds
    pub cache_ttl: u64,
    /// Seconds between cache sweeps; `None` sweeps once per TTL
    pub sweep_interval: Option<u64>,
    /// Root URL of the catalog API, without a trailing slash
    pub base_url: String,
    /// Per-request HTTP timeout in seconds; `None` waits indefinitely
    pub http_timeout: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Cached response lifetime (default: 300)
    /// - `SWEEP_INTERVAL_SECS` - Sweep period (default: same as the TTL)
    /// - `POKEAPI_BASE_URL` - Catalog root (default: https://pokeapi.co/api/v2)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout (default: none)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            sweep_interval: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Returns the cache TTL as a duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Returns the sweep period, falling back to the TTL.
    pub fn sweep_period(&self) -> Duration {
        Duration::from_secs(self.sweep_interval.unwrap_or(self.cache_ttl))
    }

    /// Returns the HTTP timeout, if one is set.
    pub fn timeout(&self) -> Option<Duration> {
        self.http_timeout.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL_SECS,
            sweep_interval: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: None,
        }
    }
}
