//! PokeAPI Client
//!
//! Fetch-or-cache access to the catalog. Every request URL is first looked
//! up in the [`ResponseCache`]; only misses reach the network, and only
//! bodies that decode successfully are stored.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Root of the public PokeAPI
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for the catalog endpoints, sharing one response cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: ResponseCache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client with a default HTTP client.
    pub fn new(cache: ResponseCache, base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), cache, base_url)
    }

    /// Creates a client around a custom HTTP client.
    pub fn with_client(http: Client, cache: ResponseCache, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            cache,
            base_url,
        }
    }

    /// Creates a client from configuration, applying the request timeout.
    pub fn from_config(config: &Config, cache: ResponseCache) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, cache, &config.base_url))
    }

    /// Returns the catalog root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the response cache backing this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// URL of the first page of location areas.
    pub fn first_location_page_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// Fetches one page of location areas.
    ///
    /// `page_url` is used verbatim, including any pagination query.
    pub async fn location_areas(&self, page_url: &str) -> Result<LocationAreaPage> {
        self.fetch_or_cache(page_url).await
    }

    /// Fetches the detail of a single location area.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_or_cache(&url).await
    }

    /// Fetches a single creature record.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_or_cache(&url).await
    }

    // == Fetch Or Cache ==
    /// Returns `url` decoded as `T`, from the cache when possible.
    ///
    /// The cache lock is never held while the request is in flight. Network
    /// and decode failures are returned as-is and nothing is cached for them.
    async fn fetch_or_cache<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(bytes) = self.cache.get(url).await {
            info!("Using cached data for {}", url);
            return serde_json::from_slice(&bytes).map_err(|source| PokedexError::CachedDecode {
                url: url.to_string(),
                source,
            });
        }

        info!("Making HTTP request to {}", url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?.to_vec();

        let decoded = serde_json::from_slice(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })?;

        self.cache.add(url, body).await;

        Ok(decoded)
    }
}
