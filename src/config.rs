//! Application configuration.
//!
//! Holds the initial list endpoint and the server's fixed page size. The
//! page size is configuration, not something derived from a fetched page:
//! the last page of a collection is usually short, and dividing by its
//! length would misreport the total page count.

use std::time::Duration;

use crate::api::DEFAULT_ENDPOINT;
use crate::cache;

/// Runtime configuration for the browser.
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial URL of the list endpoint
    pub endpoint: String,
    /// The server's fixed page size (records per full page)
    pub page_size: u64,
    /// Time-to-live for cached films
    pub film_cache_ttl: Duration,
    /// Maximum number of cached films
    pub film_cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: 10,
            film_cache_ttl: cache::DEFAULT_TTL,
            film_cache_capacity: cache::DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial list endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the fixed page size.
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Build a config from environment variables.
    ///
    /// `HOLODEX_ENDPOINT` overrides the list URL and `HOLODEX_PAGE_SIZE`
    /// the fixed page size; unset or unparsable values keep the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("HOLODEX_ENDPOINT") {
            if !endpoint.is_empty() {
                config.endpoint = endpoint;
            }
        }
        if let Ok(raw) = std::env::var("HOLODEX_PAGE_SIZE") {
            if let Ok(page_size) = raw.parse::<u64>() {
                config = config.with_page_size(page_size);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new()
            .with_endpoint("http://localhost:8000/people/")
            .with_page_size(25);
        assert_eq!(config.endpoint, "http://localhost:8000/people/");
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_page_size_floor_is_one() {
        let config = Config::new().with_page_size(0);
        assert_eq!(config.page_size, 1);
    }
}
