//! Pokedex CLI - An interactive client for the PokeAPI
//!
//! Responses are deduplicated through an in-memory TTL cache whose stale
//! entries are swept by a background reaper.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::PokedexError;
pub use repl::Session;
