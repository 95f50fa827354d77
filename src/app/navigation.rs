//! Navigation between the country list and the weather screen.
//!
//! The navigation contract mirrors a route parameter: the list screen builds
//! `/weather/{percent-encoded common name}` and the weather screen decodes
//! the parameter back to the original name before using it as the query term.

use super::{App, Screen};
use crate::view_state::WeatherViewState;

/// Build the weather route for a country display name.
pub fn weather_route(name: &str) -> String {
    format!("/weather/{}", urlencoding::encode(name))
}

/// Parse a weather route back into the decoded country name.
///
/// Returns `None` for routes that do not target the weather screen.
pub fn parse_weather_route(route: &str) -> Option<String> {
    let encoded = route.strip_prefix("/weather/")?;
    match urlencoding::decode(encoded) {
        Ok(decoded) => Some(decoded.into_owned()),
        // Malformed escapes: fall back to the raw parameter
        Err(_) => Some(encoded.to_string()),
    }
}

impl App {
    /// Navigate to the weather screen for the currently selected country.
    pub fn open_selected_country(&mut self) {
        if let Some(country) = self.list.selected_country() {
            let route = weather_route(&country.name.common);
            tracing::info!(route = %route, "navigating to weather");
            self.navigate(&route);
        }
    }

    /// Follow a route string.
    pub fn navigate(&mut self, route: &str) {
        if let Some(country) = parse_weather_route(route) {
            self.screen = Screen::Weather;
            self.spawn_fetch_weather(country);
            self.mark_dirty();
        }
    }

    /// Return to the country list, destroying the weather view state.
    pub fn navigate_to_list(&mut self) {
        self.screen = Screen::CountryList;
        self.weather = WeatherViewState::new();
        self.mark_dirty();
    }
}
