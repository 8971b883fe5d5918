//! Search page: symbol picker on the left, stats and history on the right

use super::{ViewRenderer, ViewState};
use crate::dashboard::CryptoSummary;
use crate::ui::charts::HistoryChart;
use crate::ui::widgets::{MetricCard, SymbolListWidget};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct SearchView;

impl SearchView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for SearchView {
    fn render(&self, f: &mut Frame, area: Rect, state: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        let input = state.input;
        f.render_widget(
            SymbolListWidget::new(
                state.names,
                &input.filtered,
                input.cursor,
                &input.search_query,
                input.is_search(),
            ),
            chunks[0],
        );

        match state.searched {
            Some(crypto) => render_crypto(f, chunks[1], crypto),
            None => render_placeholder(f, chunks[1], state.loading),
        }
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, loading: bool) {
    let text = if loading {
        "Fetching crypto..."
    } else {
        "Pick a symbol and press Enter to search"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_crypto(f: &mut Frame, area: Rect, crypto: &CryptoSummary) {
    let notice_height = if crypto.notice.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(notice_height), // Limited data notice
            Constraint::Length(5),             // Metrics
            Constraint::Min(8),                // History chart
        ])
        .split(area);

    render_header(f, chunks[0], crypto);

    if let Some(notice) = &crypto.notice {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        f.render_widget(
            Paragraph::new(format!("ℹ {}", notice))
                .style(Style::default().fg(Color::Blue))
                .wrap(Wrap { trim: true })
                .block(block),
            chunks[1],
        );
    }

    render_metrics(f, chunks[2], crypto);

    f.render_widget(HistoryChart::new(&crypto.history, &crypto.symbol), chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect, crypto: &CryptoSummary) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", crypto.symbol),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(crypto.icon.as_str(), Style::default().fg(Color::DarkGray)),
        Span::raw(" | "),
        Span::styled("Market Stats", Style::default().fg(Color::Yellow)),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(title).block(block), area);
}

fn render_metrics(f: &mut Frame, area: Rect, crypto: &CryptoSummary) {
    let rate = MetricCard::new(&crypto.pair_label, &crypto.rate).delta(&crypto.delta, crypto.rising);

    if crypto.is_limited() {
        f.render_widget(rate, area);
        return;
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    f.render_widget(rate, cells[0]);
    f.render_widget(MetricCard::new("HIGH / LOW", &crypto.high_low), cells[1]);
    f.render_widget(MetricCard::new("MARKET VOLUME(24H)", &crypto.volume), cells[2]);
    f.render_widget(MetricCard::new("MARKET CAP", &crypto.market_cap), cells[3]);
}
