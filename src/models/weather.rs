//! Weather data model mirroring the OpenWeatherMap current-weather JSON shape.
//!
//! The service reports API-level failures inside the payload: a `cod` field
//! carries the status even when the HTTP response itself is readable, and it
//! arrives as a number on success (`200`) but as a string on errors (`"404"`).
//! [`WeatherPayload`] absorbs both encodings; the fetch layer turns it into
//! either a [`WeatherReport`] or a typed error.

use serde::{Deserialize, Deserializer, Serialize};

/// Measurement unit for the weather display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Celsius / meters per second
    #[default]
    Metric,
    /// Fahrenheit / miles per hour
    Imperial,
}

impl Unit {
    /// The other unit.
    pub fn toggled(&self) -> Self {
        match self {
            Unit::Metric => Unit::Imperial,
            Unit::Imperial => Unit::Metric,
        }
    }

    /// Temperature suffix for this unit.
    pub fn temperature_label(&self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }

    /// Wind speed suffix for this unit.
    pub fn wind_speed_label(&self) -> &'static str {
        match self {
            Unit::Metric => "m/s",
            Unit::Imperial => "mph",
        }
    }

    /// Name shown on the toggle hint (the unit a toggle would switch to).
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Metric => "Metric",
            Unit::Imperial => "Imperial",
        }
    }
}

/// The `main` block of a weather payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MainReadings {
    /// Temperature in the requested units
    pub temp: f64,
}

/// One entry of the `weather` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConditionSummary {
    /// Human-readable condition description (e.g. "light rain")
    #[serde(default)]
    pub description: String,
}

/// The `wind` block of a weather payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindReadings {
    /// Wind speed in the requested units
    pub speed: f64,
}

/// The `clouds` block of a weather payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloudCover {
    /// Cloud coverage percentage, 0-100
    pub all: u8,
}

/// Raw weather payload as deserialized from the service.
///
/// Every data block is optional because error payloads carry only `cod`
/// and `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    /// Payload-level status code; number or string on the wire
    #[serde(deserialize_with = "deserialize_cod")]
    pub cod: i64,
    /// Error message, present on failure payloads
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub message: Option<String>,
    #[serde(default)]
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub weather: Vec<ConditionSummary>,
    #[serde(default)]
    pub wind: Option<WindReadings>,
    #[serde(default)]
    pub clouds: Option<CloudCover>,
}

impl WeatherPayload {
    /// Whether the payload reports success at the API level.
    pub fn is_success(&self) -> bool {
        self.cod == 200
    }

    /// Convert a success payload into a flat report.
    ///
    /// Returns `None` when any data block required for display is missing.
    pub fn into_report(self) -> Option<WeatherReport> {
        Some(WeatherReport {
            temperature: self.main?.temp,
            description: self.weather.into_iter().next()?.description,
            wind_speed: self.wind?.speed,
            cloud_coverage: self.clouds?.all,
        })
    }
}

/// A successfully fetched weather record, flattened for display.
///
/// Values are always the metric readings the service was asked for; the
/// [`Unit`] flag only changes how they are labeled.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Temperature (metric: Celsius)
    pub temperature: f64,
    /// Condition description
    pub description: String,
    /// Wind speed (metric: m/s)
    pub wind_speed: f64,
    /// Cloud coverage percentage, 0-100
    pub cloud_coverage: u8,
}

/// Accept `cod` as either an integer or a numeric string.
fn deserialize_cod<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cod {
        Number(i64),
        Text(String),
    }

    match Cod::deserialize(deserializer)? {
        Cod::Number(n) => Ok(n),
        Cod::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Accept `message` as a string or a number, normalizing to a string.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Number(f64),
    }

    match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Text(s)) => Ok(Some(s)),
        Some(Lenient::Number(n)) => Ok(Some(n.to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_BODY: &str = r#"{
        "cod": 200,
        "main": { "temp": 11.5, "humidity": 74 },
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain" }],
        "wind": { "speed": 4.6, "deg": 210 },
        "clouds": { "all": 75 }
    }"#;

    #[test]
    fn parses_success_payload() {
        let payload: WeatherPayload = serde_json::from_str(SUCCESS_BODY).unwrap();
        assert!(payload.is_success());

        let report = payload.into_report().unwrap();
        assert_eq!(report.temperature, 11.5);
        assert_eq!(report.description, "light rain");
        assert_eq!(report.wind_speed, 4.6);
        assert_eq!(report.cloud_coverage, 75);
    }

    #[test]
    fn parses_error_payload_with_string_cod() {
        let payload: WeatherPayload =
            serde_json::from_str(r#"{ "cod": "404", "message": "city not found" }"#).unwrap();
        assert_eq!(payload.cod, 404);
        assert!(!payload.is_success());
        assert_eq!(payload.message.as_deref(), Some("city not found"));
    }

    #[test]
    fn incomplete_success_payload_yields_no_report() {
        let payload: WeatherPayload = serde_json::from_str(r#"{ "cod": 200 }"#).unwrap();
        assert!(payload.is_success());
        assert!(payload.into_report().is_none());
    }

    #[test]
    fn unit_toggles_and_labels() {
        assert_eq!(Unit::Metric.toggled(), Unit::Imperial);
        assert_eq!(Unit::Imperial.toggled(), Unit::Metric);
        assert_eq!(Unit::Metric.temperature_label(), "°C");
        assert_eq!(Unit::Imperial.wind_speed_label(), "mph");
    }
}
