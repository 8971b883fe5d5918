use crate::ui::input::Page;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// One-line notice shown in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: MessageLevel,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
        }
    }
}

/// Page tabs on the left, loading state and the latest message on the right
pub struct StatusWidget<'a> {
    page: Page,
    loading: bool,
    message: Option<&'a StatusMessage>,
}

impl<'a> StatusWidget<'a> {
    pub fn new(page: Page, loading: bool, message: Option<&'a StatusMessage>) -> Self {
        Self {
            page,
            loading,
            message,
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Crypto Dashboard ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 30 || inner.height < 1 {
            return;
        }

        let titles: Vec<Line> = Page::ALL
            .iter()
            .map(|p| Line::from(format!("[{}] {}", p.shortcut(), p.title())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.page.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        let tabs_area = Rect {
            width: inner.width.min(32),
            ..inner
        };
        tabs.render(tabs_area, buf);

        let x = inner.x + tabs_area.width + 2;
        let right_edge = inner.x + inner.width;
        if x >= right_edge {
            return;
        }
        let room = (right_edge - x) as usize;

        let (text, style) = match (self.loading, self.message) {
            (_, Some(msg)) if msg.level == MessageLevel::Error => {
                (format!("✖ {}", msg.text), Style::default().fg(Color::Red))
            }
            (true, _) => ("● Loading...".to_string(), Style::default().fg(Color::Yellow)),
            (false, Some(msg)) => (msg.text.clone(), Style::default().fg(Color::Green)),
            (false, None) => (
                "Press '?' for help, 'q' to quit".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };
        let text: String = text.chars().take(room).collect();
        buf.set_string(x, inner.y, &text, style);
    }
}
