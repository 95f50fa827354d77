//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Screen};
use crate::view_state::ListPhase;

impl App {
    /// Handle a key press for the current screen.
    ///
    /// Quit (Ctrl+C) is handled by the event loop before this is called.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::CountryList => self.handle_list_key(key),
            Screen::Weather => self.handle_weather_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        // Retry takes over the keyboard while the fetch has failed
        if matches!(self.list.phase(), ListPhase::Failed(_)) {
            if let KeyCode::Char('r') = key.code {
                self.spawn_fetch_countries();
            }
            return;
        }

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.list.cycle_page_size();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.list.push_query_char(c);
            }
            KeyCode::Backspace => self.list.pop_query_char(),
            KeyCode::Tab => self.list.toggle_display_mode(),
            KeyCode::Up => self.list.move_selection_up(),
            KeyCode::Down => self.list.move_selection_down(),
            KeyCode::Left | KeyCode::PageUp => self.list.prev_page(),
            KeyCode::Right | KeyCode::PageDown => self.list.next_page(),
            KeyCode::Enter => self.open_selected_country(),
            _ => {}
        }
    }

    fn handle_weather_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('u') => self.weather.toggle_unit(),
            KeyCode::Esc | KeyCode::Backspace => self.navigate_to_list(),
            _ => {}
        }
    }
}
