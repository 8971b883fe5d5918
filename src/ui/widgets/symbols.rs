use crate::data::CryptoNameList;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// Filterable symbol picker for the search page
pub struct SymbolListWidget<'a> {
    names: Option<&'a CryptoNameList>,
    filtered: &'a [usize],
    cursor: usize,
    query: &'a str,
    typing: bool,
}

impl<'a> SymbolListWidget<'a> {
    pub fn new(
        names: Option<&'a CryptoNameList>,
        filtered: &'a [usize],
        cursor: usize,
        query: &'a str,
        typing: bool,
    ) -> Self {
        Self {
            names,
            filtered,
            cursor,
            query,
            typing,
        }
    }
}

impl Widget for SymbolListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.typing { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(format!(" Symbols ({}) ", self.filtered.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 8 || inner.height < 3 {
            return;
        }

        let prompt = if self.query.is_empty() && !self.typing {
            "/ to search for an asset".to_string()
        } else if self.typing {
            format!("> {}_", self.query)
        } else {
            format!("> {}", self.query)
        };
        let prompt_style = if self.typing {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        buf.set_stringn(inner.x, inner.y, &prompt, inner.width as usize, prompt_style);

        let Some(names) = self.names else {
            buf.set_string(
                inner.x,
                inner.y + 2,
                "Loading symbols...",
                Style::default().fg(Color::DarkGray),
            );
            return;
        };

        if self.filtered.is_empty() {
            buf.set_string(
                inner.x,
                inner.y + 2,
                "No matching symbols",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        // Keep the cursor inside the visible window
        let rows = (inner.height - 2) as usize;
        let start = self.cursor.saturating_sub(rows.saturating_sub(1));

        for (row, (pos, &idx)) in self
            .filtered
            .iter()
            .enumerate()
            .skip(start)
            .take(rows)
            .enumerate()
        {
            let Some(symbol) = names.names().get(idx) else {
                continue;
            };
            let y = inner.y + 2 + row as u16;
            let selected = pos == self.cursor;

            let label = match names.full_name(symbol) {
                Some(full) if full != symbol => format!("{:<8} {}", symbol, full),
                _ => symbol.clone(),
            };
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            buf.set_stringn(inner.x, y, &label, inner.width as usize, style);
        }
    }
}
