//! API Module
//!
//! Cached HTTP client for the PokeAPI catalog.
//!
//! # Endpoints
//! - `GET /location-area` - Paginated list of location areas
//! - `GET /location-area/{name}` - Creatures found in one area
//! - `GET /pokemon/{name}` - A single creature record

pub mod client;

pub use client::{PokeApiClient, DEFAULT_BASE_URL};
