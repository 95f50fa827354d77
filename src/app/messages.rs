//! AppMessage enum for async communication within the application.

use crate::api::WeatherError;
use crate::models::{Country, WeatherReport};

/// Messages received from spawned fetch tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// Country list fetch resolved
    CountriesLoaded(Vec<Country>),
    /// Country list fetch failed (transport or decode)
    CountriesLoadFailed { error: String },
    /// Weather fetch settled; `seq` identifies the request so stale
    /// responses can be discarded
    WeatherLoaded {
        seq: u64,
        outcome: Result<WeatherReport, WeatherError>,
    },
}
