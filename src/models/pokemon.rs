//! Pokemon model
//!
//! Shape of `GET /pokemon/{name}`, trimmed to the fields the Pokedex shows.

use serde::Deserialize;

use super::NamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Null for a handful of forms; treated as zero when rolling a catch
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Decodes a Pokemon from a raw response body.
    pub fn from_slice(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }
}
