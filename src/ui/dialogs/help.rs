//! Help overlay showing all keybindings

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn new() -> Self {
        Self
    }

    /// Calculate centered rect for dialog
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

        Layout::horizontal([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = Self::centered_rect(60, 70, area);

        // Clear background
        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(" Help - Keybindings ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let header_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(Color::White);
        let dim_style = Style::default().fg(Color::DarkGray);

        let key = |k: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<10}", k), key_style),
                Span::styled(desc, desc_style),
            ])
        };

        let lines = vec![
            Line::from(vec![Span::styled("PAGES", header_style)]),
            Line::from(""),
            key("1", "Dashboard (market overview)"),
            key("2", "Search (stats and history)"),
            key("Tab", "Switch page"),
            Line::from(""),
            Line::from(vec![Span::styled("DASHBOARD", header_style)]),
            Line::from(""),
            key("d", "Load the default cryptos"),
            key("r", "Load random cryptos"),
            Line::from(""),
            Line::from(vec![Span::styled("SEARCH", header_style)]),
            Line::from(""),
            key("/", "Filter symbols"),
            key("↑ ↓", "Move through symbols"),
            key("Enter", "Fetch the selected symbol"),
            key("Esc", "Stop typing"),
            Line::from(""),
            Line::from(vec![Span::styled("OTHER", header_style)]),
            Line::from(""),
            key("?", "Show this help"),
            key("q / Esc", "Quit"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press any key to close this help",
                dim_style,
            )]),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Left);

        paragraph.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_text;

    #[test]
    fn test_lists_page_and_dashboard_keys() {
        let area = Rect::new(0, 0, 120, 50);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new().render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Keybindings"));
        assert!(text.contains("Load random cryptos"));
        assert!(text.contains("Fetch the selected symbol"));
    }
}
