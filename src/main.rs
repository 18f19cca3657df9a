//! Pokedex - An interactive explorer for the PokeAPI catalog
//!
//! Reads commands from stdin and prints results to stdout; logs go to stderr.

use std::io;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::repl;
use pokedex::{Config, PokeApiClient, ResponseCache, Session};

/// Main entry point for the Pokedex.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from the environment and command line
/// 3. Create the response cache and start its reaper
/// 4. Run the command loop until `exit` or end of input
/// 5. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env());
    info!(
        "Configuration loaded: cache_ttl={}s, sweep_period={:?}, base_url={}",
        config.cache_ttl,
        config.sweep_period(),
        config.base_url
    );

    let (cache, reaper) = ResponseCache::with_sweep_interval(config.ttl(), config.sweep_period())
        .context("failed to create response cache")?;
    let client =
        PokeApiClient::from_config(&config, cache).context("failed to build HTTP client")?;
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    let result = repl::run(&mut session, stdin, &mut stdout).await;

    reaper.shutdown().await;
    info!("Pokedex shutdown complete");

    result.context("command loop failed")
}
