use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Labelled value with an optional colored delta underneath
pub struct MetricCard<'a> {
    label: &'a str,
    value: &'a str,
    delta: Option<(&'a str, bool)>,
}

impl<'a> MetricCard<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            delta: None,
        }
    }

    pub fn delta(mut self, delta: &'a str, rising: bool) -> Self {
        self.delta = Some((delta, rising));
        self
    }
}

pub fn delta_span(delta: &str, rising: bool) -> Span<'static> {
    let (arrow, color) = if rising {
        ("▲", Color::Green)
    } else {
        ("▼", Color::Red)
    };
    Span::styled(format!("{} {}", arrow, delta), Style::default().fg(color))
}

impl Widget for MetricCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let mut lines = vec![
            Line::from(Span::styled(self.label, Style::default().fg(Color::Blue))),
            Line::from(Span::styled(
                self.value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some((delta, rising)) = self.delta {
            lines.push(Line::from(delta_span(delta, rising)));
        }

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .render(area, buf);
    }
}
