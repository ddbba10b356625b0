use std::time::Duration;

use crate::domain::weather::Location;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing to show: box closed or query too short.
    Hidden,
    Pending,
    Results,
    NoResults,
    Unavailable,
}

impl SearchStatus {
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::NoResults => Some("No results found"),
            Self::Unavailable => Some("Search unavailable"),
            Self::Pending => Some("Searching..."),
            Self::Hidden | Self::Results => None,
        }
    }
}

/// City search box. Every edit bumps the generation, so only the latest
/// debounced query may publish results.
#[derive(Debug)]
pub struct SearchState {
    pub open: bool,
    pub query: String,
    pub results: Vec<Location>,
    pub selected: usize,
    pub status: SearchStatus,
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            open: false,
            query: String::new(),
            results: Vec::new(),
            selected: 0,
            status: SearchStatus::Hidden,
            generation: 0,
        }
    }
}

impl SearchState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.results.clear();
        self.selected = 0;
        self.status = SearchStatus::Hidden;
        self.generation += 1;
    }

    /// Returns the generation to debounce when the query is long enough.
    pub fn push_char(&mut self, ch: char) -> Option<u64> {
        self.query.push(ch);
        self.edited()
    }

    pub fn backspace(&mut self) -> Option<u64> {
        self.query.pop();
        self.edited()
    }

    fn edited(&mut self) -> Option<u64> {
        self.generation += 1;
        if self.trimmed_query().chars().count() < MIN_QUERY_CHARS {
            self.results.clear();
            self.selected = 0;
            self.status = SearchStatus::Hidden;
            return None;
        }
        self.status = SearchStatus::Pending;
        Some(self.generation)
    }

    #[must_use]
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.open && generation == self.generation
    }

    /// Stores results for the live generation; stale responses are dropped.
    pub fn apply_results(&mut self, generation: u64, results: Vec<Location>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.status = if results.is_empty() {
            SearchStatus::NoResults
        } else {
            SearchStatus::Results
        };
        self.results = results;
        self.selected = 0;
        true
    }

    pub fn apply_failure(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.results.clear();
        self.status = SearchStatus::Unavailable;
        true
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            return;
        }
        let last = self.results.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    #[must_use]
    pub fn selected_location(&self) -> Option<&Location> {
        self.results.get(self.selected)
    }
}

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}
