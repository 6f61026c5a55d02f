//! API Module
//!
//! PokeAPI access. Every request goes through the response cache first.
//!
//! # Resources
//! - `GET /location-area/` - Paginated list of location areas
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - A single Pokemon

pub mod client;

pub use client::PokeApiClient;
