//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// A cache lifetime or sweep interval of zero, or too long to schedule
    #[error("Invalid cache duration: {0:?} (must be greater than zero and at most 30 years)")]
    InvalidDuration(Duration),

    /// Transport failure or non-success status from the catalog
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A fresh response body did not match the expected shape
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Bytes already held by the cache could not be decoded
    #[error("Cached response for {url} could not be decoded: {source}")]
    CachedDecode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A command was invoked without its required argument
    #[error("you must provide a {0}")]
    MissingArgument(&'static str),

    /// Writing command output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message() {
        let err = PokedexError::MissingArgument("Pokemon name");
        assert_eq!(err.to_string(), "you must provide a Pokemon name");
    }

    #[test]
    fn test_invalid_duration_message() {
        let err = PokedexError::InvalidDuration(Duration::ZERO);
        assert!(err.to_string().contains("must be greater than zero"));
    }

    #[test]
    fn test_cached_decode_names_url() {
        let source = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let err = PokedexError::CachedDecode {
            url: "https://example/a".to_string(),
            source,
        };
        assert!(err.to_string().contains("https://example/a"));
    }
}
