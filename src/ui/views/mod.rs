//! Page modules for the TUI
//!
//! Each view draws one page below the status bar.

pub mod dashboard;
pub mod search;

pub use dashboard::DashboardView;
pub use search::SearchView;

use crate::dashboard::{CryptoSummary, DashboardMode};
use crate::data::CryptoNameList;
use crate::ui::input::InputState;
use ratatui::{layout::Rect, Frame};

/// Shared state passed to views for rendering
pub struct ViewState<'a> {
    pub mode: DashboardMode,
    /// Overview cards, already split into rows
    pub rows: &'a [Vec<CryptoSummary>],
    pub updated_at: Option<&'a str>,
    pub names: Option<&'a CryptoNameList>,
    pub input: &'a InputState,
    pub searched: Option<&'a CryptoSummary>,
    pub loading: bool,
}

/// Trait for renderable views
pub trait ViewRenderer {
    fn render(&self, f: &mut Frame, area: Rect, state: &ViewState);
}
