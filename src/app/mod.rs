//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`AppMessage`] - Messages for async communication
//!
//! Fetches run on spawned tasks and report back over an unbounded channel;
//! the event loop applies each [`AppMessage`] to the owning view state. The
//! two screens never run fetches concurrently against shared state: each
//! view owns its state exclusively for its lifetime.

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use navigation::{parse_weather_route, weather_route};
pub use types::Screen;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{ApiConfig, CountriesClient, WeatherClient};
use crate::traits::HttpClient;
use crate::view_state::{CountryListViewState, WeatherViewState};

/// Top-level application state.
pub struct App {
    /// Which screen is displayed
    pub screen: Screen,
    /// Country list screen state
    pub list: CountryListViewState,
    /// Weather screen state
    pub weather: WeatherViewState,
    /// Set to exit the event loop
    pub should_quit: bool,
    /// Set when the next loop iteration should redraw
    pub needs_redraw: bool,
    /// Receiver half of the message channel; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    countries_client: CountriesClient,
    weather_client: WeatherClient,
}

impl App {
    /// Create a new App over the given API configuration and transport.
    pub fn new(config: ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::default(),
            list: CountryListViewState::new(),
            weather: WeatherViewState::new(),
            should_quit: false,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            countries_client: CountriesClient::new(config.clone(), Arc::clone(&http)),
            weather_client: WeatherClient::new(config, http),
        }
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Kick off the country list fetch on a background task.
    pub fn spawn_fetch_countries(&mut self) {
        self.list.reload();
        self.mark_dirty();

        let client = self.countries_client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.fetch_countries().await {
                Ok(countries) => AppMessage::CountriesLoaded(countries),
                Err(err) => {
                    tracing::error!(error = %err, "country list fetch failed");
                    AppMessage::CountriesLoadFailed {
                        error: crate::view_state::TRANSPORT_FAILURE_MESSAGE.to_string(),
                    }
                }
            };
            let _ = tx.send(message);
        });
    }

    /// Kick off a weather fetch for a decoded country name.
    pub fn spawn_fetch_weather(&mut self, country: String) {
        let seq = self.weather.begin_fetch(country.clone());
        self.mark_dirty();

        let client = self.weather_client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = client.fetch_weather(&country).await;
            let _ = tx.send(AppMessage::WeatherLoaded { seq, outcome });
        });
    }

    /// Apply a message from a completed fetch.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::CountriesLoaded(countries) => self.list.set_countries(countries),
            AppMessage::CountriesLoadFailed { error } => self.list.fetch_failed(error),
            AppMessage::WeatherLoaded { seq, outcome } => self.weather.resolve(seq, outcome),
        }
        self.mark_dirty();
    }
}
