//! API endpoint configuration.

/// Default base URL for the country reference API.
pub const DEFAULT_COUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Default base URL for the weather API.
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default OpenWeatherMap API key (demo key; override via `ATLAS_WEATHER_API_KEY`).
pub const DEFAULT_WEATHER_API_KEY: &str = "794ee95e63c5a32aaf88cd813fa2e425";

/// Configuration for the API clients.
///
/// Base URLs and credentials are injected rather than hardcoded at the call
/// sites so tests can point the clients at a local mock server.
///
/// # Example
///
/// ```ignore
/// use atlas::api::ApiConfig;
///
/// let config = ApiConfig::default()
///     .with_weather_base_url("http://127.0.0.1:8080".to_string())
///     .with_weather_api_key("test-key".to_string());
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the country reference API
    pub countries_base_url: String,
    /// Base URL of the weather API
    pub weather_base_url: String,
    /// Static API key sent with every weather request
    pub weather_api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            countries_base_url: DEFAULT_COUNTRIES_BASE_URL.to_string(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            weather_api_key: DEFAULT_WEATHER_API_KEY.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig with default endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from the environment, falling back to defaults.
    ///
    /// Recognized variables: `ATLAS_COUNTRIES_BASE_URL`,
    /// `ATLAS_WEATHER_BASE_URL`, `ATLAS_WEATHER_API_KEY`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("ATLAS_COUNTRIES_BASE_URL") {
            config.countries_base_url = url;
        }
        if let Ok(url) = std::env::var("ATLAS_WEATHER_BASE_URL") {
            config.weather_base_url = url;
        }
        if let Ok(key) = std::env::var("ATLAS_WEATHER_API_KEY") {
            config.weather_api_key = key;
        }
        config
    }

    /// Set the countries base URL.
    pub fn with_countries_base_url(mut self, url: String) -> Self {
        self.countries_base_url = url;
        self
    }

    /// Set the weather base URL.
    pub fn with_weather_base_url(mut self, url: String) -> Self {
        self.weather_base_url = url;
        self
    }

    /// Set the weather API key.
    pub fn with_weather_api_key(mut self, key: String) -> Self {
        self.weather_api_key = key;
        self
    }
}
