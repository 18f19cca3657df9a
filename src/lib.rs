//! Pokedex - An interactive explorer for the PokeAPI catalog
//!
//! Memoizes raw API responses by request URL in a TTL cache that a
//! background reaper sweeps on a fixed period.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::ResponseCache;
pub use config::Config;
pub use repl::Session;
pub use tasks::{spawn_reaper, ReaperHandle};
