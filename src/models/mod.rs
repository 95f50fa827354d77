//! Data models for the two external APIs.
//!
//! These structs mirror the JSON shapes of restcountries.com and
//! OpenWeatherMap; both are read-only from the application's point of view.

pub mod country;
pub mod weather;

pub use country::{Country, CountryName, Flags};
pub use weather::{Unit, WeatherPayload, WeatherReport};
