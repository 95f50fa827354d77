//! Country list screen rendering.
//!
//! Renders the search bar, the derived page slice as either a table or a
//! grid of cards, and a pagination footer with disabled-state styling.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::view_state::{DisplayMode, ListPhase};

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DISABLED, COLOR_ERROR, COLOR_HEADER,
    COLOR_SELECTED,
};

/// Minimum width of one grid card, borders included.
const GRID_CARD_WIDTH: u16 = 32;

/// Height of one grid card row.
const GRID_CARD_HEIGHT: u16 = 7;

/// Render the country list screen.
pub fn render_country_list(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Table or grid body
            Constraint::Length(1), // Pagination footer
            Constraint::Length(1), // Keybind hints
        ])
        .split(area);

    render_title(frame, chunks[0], app);
    render_search_bar(frame, chunks[1], app);

    match app.list.phase() {
        ListPhase::Loading => render_notice(frame, chunks[2], "Loading countries...", COLOR_DIM),
        ListPhase::Failed(message) => render_notice(frame, chunks[2], message, COLOR_ERROR),
        ListPhase::Ready => match app.list.display_mode() {
            DisplayMode::Table => render_table(frame, chunks[2], app),
            DisplayMode::Grid => render_grid(frame, chunks[2], app),
        },
    }

    render_pagination(frame, chunks[3], app);
    render_hints(frame, chunks[4], app);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            " Country List ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{} view]", app.list.display_mode().display_name()),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let query = app.list.search_query();
    let content = if query.is_empty() {
        Span::styled("Search country...", Style::default().fg(COLOR_DIM))
    } else {
        Span::styled(query, Style::default().fg(COLOR_ACCENT))
    };

    let search = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(" Search "),
    );
    frame.render_widget(search, area);
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str, color: ratatui::style::Color) {
    let notice = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(notice, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(["Name", "Capital", "Region", "Population"].map(|label| {
        Cell::from(Span::styled(
            label,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
    }));

    let rows: Vec<Row> = app
        .list
        .page_slice()
        .into_iter()
        .map(|country| {
            Row::new(vec![
                Cell::from(country.name.common.clone()),
                Cell::from(country.capital_display().to_string()),
                Cell::from(country.region.clone()),
                Cell::from(country.population_display()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .row_highlight_style(
        Style::default()
            .fg(COLOR_SELECTED)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );

    let mut state = TableState::default();
    state.select(Some(app.list.selected_index()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let slice = app.list.page_slice();
    let selected = app.list.selected_index();

    let columns = (area.width / GRID_CARD_WIDTH).max(1) as usize;
    let visible_rows = (area.height / GRID_CARD_HEIGHT).max(1) as usize;

    // Keep the selected card visible by scrolling whole rows
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(GRID_CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in row_chunks.iter().enumerate() {
        let row_index = first_row + row_offset;
        let start = row_index * columns;
        if start >= slice.len() {
            break;
        }

        let col_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (col, col_area) in col_chunks.iter().enumerate() {
            let index = start + col;
            let Some(country) = slice.get(index) else {
                break;
            };

            let is_selected = index == selected;
            let border_style = if is_selected {
                Style::default().fg(COLOR_SELECTED)
            } else {
                Style::default().fg(COLOR_BORDER)
            };

            let lines = vec![
                Line::from(Span::styled(
                    country.name.common.clone(),
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Capital: {}", country.capital_display())),
                Line::from(format!("Region: {}", country.region)),
                Line::from(format!("Population: {}", country.population_display())),
                Line::from(Span::styled(
                    country.flags.png.clone(),
                    Style::default().fg(COLOR_DIM),
                )),
            ];

            let card = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            frame.render_widget(card, *col_area);
        }
    }
}

fn render_pagination(frame: &mut Frame, area: Rect, app: &App) {
    let prev_style = if app.list.has_prev_page() {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DISABLED)
    };
    let next_style = if app.list.has_next_page() {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DISABLED)
    };

    let footer = Line::from(vec![
        Span::styled(" ← Previous ", prev_style),
        Span::styled(
            format!(
                " Page {} of {} ",
                app.list.current_page(),
                app.list.total_pages()
            ),
            Style::default().fg(COLOR_HEADER),
        ),
        Span::styled(" Next → ", next_style),
        Span::styled(
            format!("  Show: {}", app.list.page_size().as_usize()),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(footer), area);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if matches!(app.list.phase(), ListPhase::Failed(_)) {
        " r retry · Ctrl+C quit"
    } else {
        " type to search · ↑↓ select · ←→ page · Tab table/grid · Ctrl+S page size · Enter weather · Ctrl+C quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        area,
    );
}
