//! API clients for the two external services.
//!
//! Both clients sit on top of the [`HttpClient`](crate::traits::HttpClient)
//! trait so tests can substitute a mock transport, and both take their
//! endpoints from [`ApiConfig`] so integration tests can point them at a
//! local server.
//!
//! Error taxonomy: transport failures (the request itself fails) are distinct
//! from API-reported failures (the weather service answers with an error code
//! inside the payload). View code matches on these variants and never looks
//! at raw payload shape.

pub mod config;
pub mod countries;
pub mod weather;

pub use config::ApiConfig;
pub use countries::CountriesClient;
pub use weather::WeatherClient;

use crate::traits::HttpError;

/// Error fetching the country list.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The network call itself failed
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),
    /// The response body could not be decoded
    #[error("decode failure: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error fetching weather data.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The service answered but reported a domain failure in the payload
    #[error("weather API error {code}")]
    Api {
        /// Status-style code from the payload (`cod`)
        code: i64,
        /// Service-provided message, when present
        message: Option<String>,
    },
    /// The network call itself failed
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),
    /// The response body could not be decoded
    #[error("decode failure: {0}")]
    Decode(#[from] serde_json::Error),
    /// The service reported success but the payload lacked required blocks
    #[error("weather payload missing required data")]
    MissingData,
}
