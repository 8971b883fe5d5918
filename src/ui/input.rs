//! Input state management for the TUI
//!
//! Tracks the active page, whether the symbol filter is being typed, and
//! the cursor into the filtered symbol list.

use crate::data::CryptoNameList;

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Typing into the symbol filter
    Search,
    /// Help overlay is shown
    Help,
}

/// Page being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Search,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Dashboard, Page::Search];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Search => "Search",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Page::Dashboard => '1',
            Page::Search => '2',
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Dashboard => 0,
            Page::Search => 1,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Page::Dashboard => Page::Search,
            Page::Search => Page::Dashboard,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputState {
    pub mode: InputMode,
    pub page: Page,
    /// Symbol filter typed on the search page
    pub search_query: String,
    /// Indices into the name list matching `search_query`
    pub filtered: Vec<usize>,
    /// Position inside `filtered`
    pub cursor: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            page: Page::Dashboard,
            search_query: String::new(),
            filtered: Vec::new(),
            cursor: 0,
        }
    }
}

impl InputState {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn is_normal(&self) -> bool {
        self.mode == InputMode::Normal
    }

    pub fn is_search(&self) -> bool {
        self.mode == InputMode::Search
    }

    pub fn is_help(&self) -> bool {
        self.mode == InputMode::Help
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn enter_search(&mut self) {
        self.page = Page::Search;
        self.mode = InputMode::Search;
    }

    /// Stop typing; the current filter stays applied
    pub fn exit_search(&mut self) {
        self.mode = InputMode::Normal;
    }

    pub fn show_help(&mut self) {
        self.mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.mode = InputMode::Normal;
    }

    pub fn push_char(&mut self, c: char, names: Option<&CryptoNameList>) {
        self.search_query.push(c);
        self.update_search(names);
    }

    pub fn pop_char(&mut self, names: Option<&CryptoNameList>) {
        self.search_query.pop();
        self.update_search(names);
    }

    /// Recompute the filtered list and keep the cursor in range
    pub fn update_search(&mut self, names: Option<&CryptoNameList>) {
        self.filtered = names
            .map(|n| n.search(&self.search_query))
            .unwrap_or_default();
        self.cursor = self.cursor.min(self.filtered.len().saturating_sub(1));
    }

    pub fn cursor_down(&mut self) {
        if !self.filtered.is_empty() {
            self.cursor = (self.cursor + 1) % self.filtered.len();
        }
    }

    pub fn cursor_up(&mut self) {
        if !self.filtered.is_empty() {
            self.cursor = self
                .cursor
                .checked_sub(1)
                .unwrap_or(self.filtered.len() - 1);
        }
    }

    /// Symbol under the cursor
    pub fn selected<'a>(&self, names: &'a CryptoNameList) -> Option<&'a str> {
        self.filtered
            .get(self.cursor)
            .and_then(|&i| names.names().get(i))
            .map(String::as_str)
    }
}
