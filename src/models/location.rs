//! Location area models
//!
//! Shapes of the paginated `location-area` list and a single area's detail.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference to another catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of `GET /location-area`.
///
/// `next` and `previous` are absolute URLs of the neighbouring pages, or
/// `None` at either end of the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of areas in the catalog
    pub count: u32,
    /// URL of the following page
    pub next: Option<String>,
    /// URL of the preceding page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

/// Detail of `GET /location-area/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub game_index: u32,
    /// Creatures that can be encountered in this area
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
