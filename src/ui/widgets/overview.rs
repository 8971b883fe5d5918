use crate::dashboard::CryptoSummary;
use crate::ui::widgets::metric::delta_span;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Dashboard card: symbol, rate against USD and the 24h change
pub struct CryptoOverviewWidget<'a> {
    crypto: &'a CryptoSummary,
}

impl<'a> CryptoOverviewWidget<'a> {
    pub fn new(crypto: &'a CryptoSummary) -> Self {
        Self { crypto }
    }
}

impl Widget for CryptoOverviewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.crypto.symbol))
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let lines = vec![
            Line::from(Span::styled(
                self.crypto.pair_label.as_str(),
                Style::default().fg(Color::Blue),
            )),
            Line::from(Span::styled(
                self.crypto.rate.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(delta_span(&self.crypto.delta, self.crypto.rising)),
            Line::from(Span::styled(
                self.crypto.icon.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
