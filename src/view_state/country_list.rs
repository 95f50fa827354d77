//! View state for the country list screen.
//!
//! Holds the full fetched list plus the user-controlled search query,
//! display mode, and pagination cursor. The filtered list, page slice, and
//! page count are derived on every read rather than stored.

use crate::models::Country;

// ============================================================================
// DisplayMode
// ============================================================================

/// Table or grid rendering for the country list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Table,
    Grid,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggled(&self) -> Self {
        match self {
            DisplayMode::Table => DisplayMode::Grid,
            DisplayMode::Grid => DisplayMode::Table,
        }
    }

    /// Get the display name for this mode.
    pub fn display_name(&self) -> &'static str {
        match self {
            DisplayMode::Table => "Table",
            DisplayMode::Grid => "Grid",
        }
    }
}

// ============================================================================
// PageSize
// ============================================================================

/// Page size, constrained to a fixed enumerated set at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Ten,
    #[default]
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    /// Number of items per page.
    pub fn as_usize(&self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Cycle to the next size: 10 → 25 → 50 → 100 → 10.
    pub fn next(&self) -> Self {
        match self {
            PageSize::Ten => PageSize::TwentyFive,
            PageSize::TwentyFive => PageSize::Fifty,
            PageSize::Fifty => PageSize::Hundred,
            PageSize::Hundred => PageSize::Ten,
        }
    }
}

// ============================================================================
// ListPhase
// ============================================================================

/// Fetch lifecycle of the country list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListPhase {
    /// Fetch in flight (also the initial state)
    #[default]
    Loading,
    /// List available
    Ready,
    /// Fetch failed with a user-facing message
    Failed(String),
}

// ============================================================================
// CountryListViewState
// ============================================================================

/// State backing the country list screen.
///
/// `countries` is set once after the fetch resolves; every other field is
/// mutated only by user interaction. Changing the search query or page size
/// resets the page cursor to 1.
#[derive(Debug, Clone)]
pub struct CountryListViewState {
    countries: Vec<Country>,
    search_query: String,
    display_mode: DisplayMode,
    /// 1-based page cursor
    current_page: usize,
    page_size: PageSize,
    /// Selected row within the current page slice
    selected: usize,
    phase: ListPhase,
}

impl Default for CountryListViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryListViewState {
    /// Create a new view state, awaiting the initial fetch.
    pub fn new() -> Self {
        Self {
            countries: Vec::new(),
            search_query: String::new(),
            display_mode: DisplayMode::default(),
            current_page: 1,
            page_size: PageSize::default(),
            selected: 0,
            phase: ListPhase::default(),
        }
    }

    // -------------------- fetch lifecycle --------------------

    /// Store the fetched list and mark the view ready.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
        self.current_page = 1;
        self.selected = 0;
        self.phase = ListPhase::Ready;
    }

    /// Mark the fetch as failed with a user-facing message.
    pub fn fetch_failed(&mut self, message: String) {
        self.phase = ListPhase::Failed(message);
    }

    /// Mark a fetch as in flight again (retry).
    pub fn reload(&mut self) {
        self.phase = ListPhase::Loading;
    }

    /// Current fetch phase.
    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    // -------------------- derived state --------------------

    /// Countries whose display name contains the search query,
    /// case-insensitive. An empty query matches everything.
    pub fn filtered(&self) -> Vec<&Country> {
        let query = self.search_query.to_lowercase();
        self.countries
            .iter()
            .filter(|country| country.name.common.to_lowercase().contains(&query))
            .collect()
    }

    /// Number of pages for the current filter, 0 when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size.as_usize())
    }

    /// The slice of the filtered list shown on the current page.
    pub fn page_slice(&self) -> Vec<&Country> {
        let size = self.page_size.as_usize();
        let start = (self.current_page - 1) * size;
        self.filtered().into_iter().skip(start).take(size).collect()
    }

    /// The country under the selection cursor, if any.
    pub fn selected_country(&self) -> Option<&Country> {
        let slice = self.page_slice();
        if slice.is_empty() {
            None
        } else {
            Some(slice[self.selected.min(slice.len() - 1)])
        }
    }

    /// Selection index, clamped to the current slice.
    pub fn selected_index(&self) -> usize {
        let len = self.page_slice().len();
        if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        }
    }

    // -------------------- accessors --------------------

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Whether `prev_page` would do anything.
    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// Whether `next_page` would do anything.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    // -------------------- mutators --------------------

    /// Replace the search query, resetting the page cursor.
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.current_page = 1;
        self.selected = 0;
    }

    /// Append a character to the search query, resetting the page cursor.
    pub fn push_query_char(&mut self, c: char) {
        self.search_query.push(c);
        self.current_page = 1;
        self.selected = 0;
    }

    /// Delete the last character of the search query, resetting the page cursor.
    pub fn pop_query_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.current_page = 1;
            self.selected = 0;
        }
    }

    /// Switch between table and grid rendering.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// Toggle table/grid rendering.
    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }

    /// Replace the page size, resetting the page cursor.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.current_page = 1;
        self.selected = 0;
    }

    /// Cycle the page size through the fixed set, resetting the page cursor.
    pub fn cycle_page_size(&mut self) {
        self.set_page_size(self.page_size.next());
    }

    /// Advance one page; no-op on the last page (or when there are none).
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            self.selected = 0;
        }
    }

    /// Go back one page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
            self.selected = 0;
        }
    }

    /// Move the selection cursor up within the current slice.
    pub fn move_selection_up(&mut self) {
        self.selected = self.selected_index().saturating_sub(1);
    }

    /// Move the selection cursor down within the current slice.
    pub fn move_selection_down(&mut self) {
        let len = self.page_slice().len();
        if len > 0 && self.selected_index() < len - 1 {
            self.selected = self.selected_index() + 1;
        }
    }
}
