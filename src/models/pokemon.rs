//! Creature detail model for `GET /pokemon/{name}`.

use serde::{Deserialize, Serialize};

/// A creature record as returned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Missing or null for some forms; treated as zero
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: i32,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: StatName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatName {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: TypeName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeName {
    pub name: String,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(0))
}
