//! Configuration Module
//!
//! Loads client settings from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_MS;

/// Public PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API root, without trailing slash
    pub base_url: String,
    /// Cache entry lifetime in milliseconds
    pub cache_ttl_ms: u64,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Exclusive upper bound of the catch roll
    pub catch_difficulty: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `CACHE_TTL_MS` - Cache TTL and reap period in ms (default: 5000)
    /// - `REQUEST_TIMEOUT_SECS` - HTTP timeout in seconds (default: 10)
    /// - `CATCH_DIFFICULTY` - Upper bound of the catch roll (default: 350)
    ///
    /// Missing, unparseable or zero values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            cache_ttl_ms: positive_var("CACHE_TTL_MS").unwrap_or(defaults.cache_ttl_ms),
            request_timeout_secs: positive_var("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            catch_difficulty: positive_var("CATCH_DIFFICULTY")
                .unwrap_or(defaults.catch_difficulty),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl_ms: DEFAULT_TTL_MS,
            request_timeout_secs: 10,
            catch_difficulty: 350,
        }
    }
}

/// Reads a numeric variable, rejecting zero.
fn positive_var<T>(name: &str) -> Option<T>
where
    T: FromStr + PartialEq + Default,
{
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|v| *v != T::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_ttl_ms, 5000);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.catch_difficulty, 350);
        assert_eq!(config.cache_ttl(), Duration::from_secs(5));
    }

    // Single test touching the environment, so parallel tests cannot race on it
    #[test]
    fn test_config_from_env() {
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("REQUEST_TIMEOUT_SECS");
        env::remove_var("CATCH_DIFFICULTY");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("POKEAPI_BASE_URL", "http://localhost:8080/api/");
        env::set_var("CACHE_TTL_MS", "250");
        env::set_var("REQUEST_TIMEOUT_SECS", "0");
        env::set_var("CATCH_DIFFICULTY", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.cache_ttl(), Duration::from_millis(250));
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.catch_difficulty, 350);

        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("REQUEST_TIMEOUT_SECS");
        env::remove_var("CATCH_DIFFICULTY");
    }
}
