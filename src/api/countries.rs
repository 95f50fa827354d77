//! Client for the country reference API.

use std::sync::Arc;

use crate::api::{ApiConfig, FetchError};
use crate::models::Country;
use crate::traits::{Headers, HttpClient};

/// Client for fetching the full country dataset.
///
/// One unauthenticated GET returns every country; filtering and pagination
/// happen entirely in the view state. No retries, no caching.
#[derive(Clone)]
pub struct CountriesClient {
    config: ApiConfig,
    http: Arc<dyn HttpClient>,
}

impl CountriesClient {
    /// Create a new client over the given transport.
    pub fn new(config: ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Fetch the full country list.
    ///
    /// The body is parsed regardless of HTTP status; only transport failures
    /// and undecodable bodies are errors.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        let url = format!("{}/all", self.config.countries_base_url);
        tracing::debug!(url = %url, "fetching country list");

        let response = self.http.get(&url, &Headers::new()).await?;
        let countries: Vec<Country> = response.json()?;

        tracing::info!(count = countries.len(), "country list fetched");
        Ok(countries)
    }
}
