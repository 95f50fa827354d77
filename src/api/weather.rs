//! Client for the weather API.

use std::sync::Arc;

use crate::api::{ApiConfig, WeatherError};
use crate::models::{WeatherPayload, WeatherReport};
use crate::traits::{Headers, HttpClient};

/// Client for fetching current weather by query term.
///
/// Always requests metric units; the unit toggle in the UI only relabels the
/// values. The service reports domain failures inside the payload (`cod`),
/// so the body is parsed regardless of HTTP status and the outcome is tagged
/// here rather than in view code.
#[derive(Clone)]
pub struct WeatherClient {
    config: ApiConfig,
    http: Arc<dyn HttpClient>,
}

impl WeatherClient {
    /// Create a new client over the given transport.
    pub fn new(config: ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Fetch current weather for a query term (a country common name).
    pub async fn fetch_weather(&self, query: &str) -> Result<WeatherReport, WeatherError> {
        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.config.weather_base_url,
            urlencoding::encode(query),
            self.config.weather_api_key,
        );
        tracing::debug!(query = %query, "fetching weather");

        let response = self.http.get(&url, &Headers::new()).await?;
        let payload: WeatherPayload = response.json()?;

        if !payload.is_success() {
            tracing::warn!(code = payload.cod, "weather API reported failure");
            return Err(WeatherError::Api {
                code: payload.cod,
                message: payload.message,
            });
        }

        payload.into_report().ok_or(WeatherError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    const SUCCESS_BODY: &str = r#"{
        "cod": 200,
        "main": { "temp": 11.5 },
        "weather": [{ "description": "light rain" }],
        "wind": { "speed": 4.6 },
        "clouds": { "all": 75 }
    }"#;

    fn client_with(mock: &MockHttpClient) -> WeatherClient {
        let config = ApiConfig::default()
            .with_weather_base_url("https://weather.test/data/2.5".to_string())
            .with_weather_api_key("test-key".to_string());
        WeatherClient::new(config, Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn success_payload_becomes_report() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(SUCCESS_BODY),
        )));

        let report = client_with(&mock).fetch_weather("Norway").await.unwrap();
        assert_eq!(report.temperature, 11.5);
        assert_eq!(report.cloud_coverage, 75);
    }

    #[tokio::test]
    async fn request_url_carries_query_key_and_units() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(SUCCESS_BODY),
        )));

        client_with(&mock)
            .fetch_weather("Côte d'Ivoire")
            .await
            .unwrap();

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        let url = &requests[0].url;
        assert!(url.starts_with("https://weather.test/data/2.5/weather?q="));
        assert!(url.contains("appid=test-key"));
        assert!(url.contains("units=metric"));
        // The query term is percent-encoded on the wire
        assert!(url.contains("q=C%C3%B4te%20d%27Ivoire"));
    }

    #[tokio::test]
    async fn api_failure_payload_becomes_api_error() {
        let mock = MockHttpClient::new();
        // HTTP 404 with a readable body: the payload code wins
        mock.set_default_response(MockResponse::Success(Response::new(
            404,
            Bytes::from(r#"{ "cod": "404", "message": "city not found" }"#),
        )));

        let err = client_with(&mock)
            .fetch_weather("Nowhereland")
            .await
            .unwrap_err();
        match err {
            WeatherError::Api { code, message } => {
                assert_eq!(code, 404);
                assert_eq!(message.as_deref(), Some("city not found"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn transport_failure_becomes_transport_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::Timeout(
            "deadline exceeded".to_string(),
        )));

        let err = client_with(&mock).fetch_weather("Norway").await.unwrap_err();
        assert!(matches!(err, WeatherError::Transport(_)));
    }

    #[tokio::test]
    async fn success_code_with_missing_blocks_is_missing_data() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"{ "cod": 200 }"#),
        )));

        let err = client_with(&mock).fetch_weather("Norway").await.unwrap_err();
        assert!(matches!(err, WeatherError::MissingData));
    }
}
