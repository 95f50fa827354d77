//! UI rendering for the atlas TUI.
//!
//! Rendering is a pure function of the view state: each screen's render
//! function reads the derived data off [`App`] and draws it, never mutating
//! anything.

mod country_list;
mod theme;
mod weather;

pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DISABLED, COLOR_ERROR, COLOR_HEADER,
    COLOR_SELECTED,
};

use ratatui::Frame;

use crate::app::{App, Screen};
use country_list::render_country_list;
use weather::render_weather;

/// Render the UI based on the current screen.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::CountryList => render_country_list(frame, app),
        Screen::Weather => render_weather(frame, app),
    }
}
