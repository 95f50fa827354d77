//! Weather screen rendering.
//!
//! Renders exactly one of the loading, error, or data states, plus the unit
//! toggle hint. The displayed values are always the fetched metric readings;
//! the unit flag only changes the labels.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::view_state::WeatherPhase;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

/// Render the weather screen.
pub fn render_weather(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Unit toggle hint
            Constraint::Min(3),    // Loading / error / data
            Constraint::Length(1), // Keybind hints
        ])
        .split(area);

    render_title(frame, chunks[0], app);
    render_unit_hint(frame, chunks[1], app);
    render_body(frame, chunks[2], app);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " u toggle units · Esc back · Ctrl+C quit",
            Style::default().fg(COLOR_DIM),
        )),
        chunks[3],
    );
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(Span::styled(
        format!(" Weather in {} ", app.weather.country()),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(title), area);
}

fn render_unit_hint(frame: &mut Frame, area: Rect, app: &App) {
    let other = app.weather.unit().toggled();
    let hint = Line::from(Span::styled(
        format!(" Switch to {}", other.display_name()),
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(hint), area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    match app.weather.phase() {
        WeatherPhase::Idle | WeatherPhase::Loading => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Loading weather...",
                    Style::default().fg(COLOR_DIM),
                )),
                area,
            );
        }
        WeatherPhase::Failure => {
            let message = app.weather.error().unwrap_or("Unknown error");
            frame.render_widget(
                Paragraph::new(Span::styled(
                    message,
                    Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                )),
                area,
            );
        }
        WeatherPhase::Success => render_report(frame, area, app),
    }
}

fn render_report(frame: &mut Frame, area: Rect, app: &App) {
    let Some(report) = app.weather.record() else {
        return;
    };
    let unit = app.weather.unit();

    let lines = vec![
        Line::from(format!(
            "Temperature: {}{}",
            report.temperature,
            unit.temperature_label()
        )),
        Line::from(format!("Precipitation: {}", report.description)),
        Line::from(format!(
            "Wind Speed: {} {}",
            report.wind_speed,
            unit.wind_speed_label()
        )),
        Line::from(format!("Cloud Coverage: {}%", report.cloud_coverage)),
    ];

    let body = Paragraph::new(lines)
        .style(Style::default().fg(COLOR_ACCENT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
    frame.render_widget(body, area);
}
