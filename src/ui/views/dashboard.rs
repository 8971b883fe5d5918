//! Overview page: two rows of crypto cards

use super::{ViewRenderer, ViewState};
use crate::ui::widgets::CryptoOverviewWidget;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct DashboardView;

impl DashboardView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for DashboardView {
    fn render(&self, f: &mut Frame, area: Rect, state: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(2), // Section header
                Constraint::Min(6),    // Cards
            ])
            .split(area);

        render_title(f, chunks[0]);
        render_section_header(f, chunks[1], state);
        render_cards(f, chunks[2], state);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Cryptoeconomy Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Live crypto rates from the coinlayer API",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}

fn render_section_header(f: &mut Frame, area: Rect, state: &ViewState) {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled(
            " Market Overview ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({}) ", state.mode.label()),
            Style::default().fg(Color::Magenta),
        ),
    ];
    if let Some(updated) = state.updated_at {
        spans.push(Span::styled(
            format!("| Last updated: {} ", updated),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.extend([
        Span::raw("| "),
        Span::styled("[d]", key),
        Span::raw(" Default "),
        Span::styled("[r]", key),
        Span::raw(" Random"),
    ]);

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cards(f: &mut Frame, area: Rect, state: &ViewState) {
    if state.rows.is_empty() {
        let text = if state.loading {
            "Loading cryptos..."
        } else {
            "No cryptos loaded. Press 'd' or 'r' to fetch."
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
        return;
    }

    let row_constraints: Vec<Constraint> = state
        .rows
        .iter()
        .map(|_| Constraint::Ratio(1, state.rows.len() as u32))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row, row_area) in state.rows.iter().zip(row_areas.iter()) {
        if row.is_empty() {
            continue;
        }
        let card_constraints: Vec<Constraint> = row
            .iter()
            .map(|_| Constraint::Ratio(1, row.len() as u32))
            .collect();
        let card_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(card_constraints)
            .split(*row_area);

        for (crypto, card_area) in row.iter().zip(card_areas.iter()) {
            f.render_widget(CryptoOverviewWidget::new(crypto), *card_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{CryptoSummary, DashboardMode};
    use crate::data::Crypto;
    use crate::ui::input::InputState;
    use crate::ui::widgets::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &ViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| DashboardView::new().render(f, f.area(), state))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_two_rows() {
        let summaries: Vec<CryptoSummary> = ["BTC", "ETH", "BNB", "XRP", "ADA", "DOGE"]
            .iter()
            .map(|s| CryptoSummary::from(&Crypto::new(s, None, None)))
            .collect();
        let rows = vec![summaries[..3].to_vec(), summaries[3..].to_vec()];
        let input = InputState::default();
        let state = ViewState {
            mode: DashboardMode::Random,
            rows: &rows,
            updated_at: Some("2023-11-30 12:00:00"),
            names: None,
            input: &input,
            searched: None,
            loading: false,
        };

        let text = draw(&state);
        assert!(text.contains("Cryptoeconomy Dashboard"));
        assert!(text.contains("(Random)"));
        assert!(text.contains("Last updated: 2023-11-30 12:00:00"));
        assert!(text.contains("BTC / USD"));
        assert!(text.contains("DOGE / USD"));
    }

    #[test]
    fn test_empty_while_loading() {
        let input = InputState::default();
        let state = ViewState {
            mode: DashboardMode::Default,
            rows: &[],
            updated_at: None,
            names: None,
            input: &input,
            searched: None,
            loading: true,
        };
        assert!(draw(&state).contains("Loading cryptos..."));
    }
}
