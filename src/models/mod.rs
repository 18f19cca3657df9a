//! Response models for the PokeAPI catalog
//!
//! Deserialization targets for the three endpoints the Pokedex reads.
//! Only the fields the commands use are mapped; unknown fields are ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
