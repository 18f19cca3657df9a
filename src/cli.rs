//! Command-line interface parsing
//!
//! Flags override the values loaded from the environment.

use clap::Parser;

use crate::config::Config;

/// Pokedex - explore PokeAPI location areas and catch Pokemon
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex backed by PokeAPI")]
#[command(version)]
pub struct Cli {
    /// Seconds a cached response is kept (overrides CACHE_TTL_SECS)
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// Seconds between cache sweeps (overrides SWEEP_INTERVAL_SECS)
    #[arg(long, value_name = "SECS")]
    pub sweep_interval: Option<u64>,

    /// Catalog root URL (overrides POKEAPI_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Per-request HTTP timeout in seconds (overrides HTTP_TIMEOUT_SECS)
    #[arg(long, value_name = "SECS")]
    pub http_timeout: Option<u64>,
}

impl Cli {
    /// Applies any flags that were given on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(ttl) = self.cache_ttl {
            config.cache_ttl = ttl;
        }
        if let Some(interval) = self.sweep_interval {
            config.sweep_interval = Some(interval);
        }
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(timeout) = self.http_timeout {
            config.http_timeout = Some(timeout);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["pokedex"]).unwrap();
        let config = cli.apply(Config::default());

        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "pokedex",
            "--cache-ttl",
            "60",
            "--sweep-interval",
            "10",
            "--base-url",
            "http://localhost:3000",
            "--http-timeout",
            "5",
        ])
        .unwrap();
        let config = cli.apply(Config::default());

        assert_eq!(config.cache_ttl, 60);
        assert_eq!(config.sweep_interval, Some(10));
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.http_timeout, Some(5));
    }

    #[test]
    fn test_rejects_non_numeric_ttl() {
        assert!(Cli::try_parse_from(["pokedex", "--cache-ttl", "soon"]).is_err());
    }
}
