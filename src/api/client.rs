//! PokeAPI Client
//!
//! Fetches raw response bodies, consulting the [`Cache`] before the network.

use tracing::{debug, instrument};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// HTTP client for the PokeAPI, keyed on request URL in the response cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    cache: Cache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client for `config.base_url` sharing the given cache.
    pub fn new(config: &Config, cache: Cache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == URLs ==
    /// First page of the location area listing.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the body for `url`, from the cache when a live entry exists.
    ///
    /// On a miss the body is fetched and cached only if the response status
    /// is a success. The cache lock is never held across the request.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(data) = self.cache.get(url).await {
            debug!("Cache hit");
            return Ok(data);
        }

        debug!("Cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                status,
                url: url.to_string(),
            });
        }

        let data = response.bytes().await?.to_vec();
        self.cache.put(url, data.clone()).await;
        debug!(bytes = data.len(), "Cached response");

        Ok(data)
    }

    // == Typed Requests ==
    /// Fetches one page of location areas by its full URL.
    pub async fn location_page(&self, url: &str) -> Result<LocationAreaPage> {
        let data = self.fetch(url).await?;
        Ok(LocationAreaPage::from_slice(&data)?)
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let data = self.fetch(&self.location_area_url(name)).await?;
        Ok(LocationArea::from_slice(&data)?)
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let data = self.fetch(&self.pokemon_url(name)).await?;
        Ok(Pokemon::from_slice(&data)?)
    }
}
