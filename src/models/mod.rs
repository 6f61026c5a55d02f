//! PokeAPI response models
//!
//! Typed views of the JSON bodies the client decodes after a cache lookup.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
