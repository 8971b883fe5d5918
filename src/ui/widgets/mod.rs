pub mod metric;
pub mod overview;
pub mod status;
pub mod symbols;

pub use metric::MetricCard;
pub use overview::CryptoOverviewWidget;
pub use status::{MessageLevel, StatusMessage, StatusWidget};
pub use symbols::SymbolListWidget;

/// Rendered buffer as plain text, one line per row
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
