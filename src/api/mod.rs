//! SWAPI client for fetching people pages and films.
//!
//! A thin client over the [`HttpClient`] abstraction: one GET per call, no
//! retries, no timeout beyond the underlying client's defaults. Non-2xx
//! responses and transport failures both surface as [`ApiError`].

use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

use crate::adapters::ReqwestHttpClient;
use crate::models::{Film, PeoplePage};
use crate::traits::{Headers, HttpClient, HttpError};

/// Default list endpoint for the people collection.
pub const DEFAULT_ENDPOINT: &str = "https://swapi.dev/api/people/";

/// Error type for API client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, bad URL)
    #[error("request failed: {0}")]
    Http(#[from] HttpError),
    /// Server returned a non-2xx status
    #[error("server error ({status}): {message}")]
    Status { status: u16, message: String },
    /// Response body was not the expected JSON shape
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for the SWAPI-style people/films endpoints.
///
/// Cheap to clone; the underlying HTTP client is shared.
#[derive(Clone)]
pub struct SwapiClient {
    http: Arc<dyn HttpClient>,
}

impl SwapiClient {
    /// Create a client backed by the production reqwest adapter.
    pub fn new() -> Self {
        Self::with_http(Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client over any [`HttpClient`] implementation.
    ///
    /// Tests inject [`crate::adapters::mock::MockHttpClient`] here.
    pub fn with_http(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Fetch one page of people records.
    ///
    /// The URL is either the configured initial endpoint or a `next`/
    /// `previous` link taken verbatim from a previously fetched page.
    pub async fn fetch_page(&self, url: &str) -> Result<PeoplePage, ApiError> {
        self.get_json(url).await
    }

    /// Fetch a single film by its canonical URL.
    pub async fn fetch_film(&self, url: &str) -> Result<Film, ApiError> {
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get(url, &Headers::new()).await?;

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: response.text().unwrap_or_default(),
            });
        }

        Ok(response.json()?)
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SwapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapiClient").finish_non_exhaustive()
    }
}
