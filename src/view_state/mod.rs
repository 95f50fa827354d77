//! View state for the two screens.
//!
//! Each screen owns its state exclusively for its lifetime; nothing mutable
//! crosses the screen boundary. Derived data (filtered list, page slice,
//! page count) is recomputed from base state on every read rather than
//! stored independently.

pub mod country_list;
pub mod weather_view;

pub use country_list::{CountryListViewState, DisplayMode, ListPhase, PageSize};
pub use weather_view::{
    WeatherPhase, WeatherViewState, API_FAILURE_FALLBACK, TRANSPORT_FAILURE_MESSAGE,
};
