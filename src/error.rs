//! Error types for the Pokedex client
//!
//! The cache itself is total; these cover fetching, decoding and command input.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for REPL commands.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport failure talking to the API
    #[error("Error making request: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { status: StatusCode, url: String },

    /// Response body did not match the expected shape
    #[error("Error parsing response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was called without its required parameter
    #[error("Missing required parameter <{0}>")]
    MissingArgument(&'static str),

    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
