use crate::dashboard::ChartPoint;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};

const LINE_COLOR: Color = Color::Rgb(0xff, 0xaa, 0x00);

/// Daily rate line for the search page
pub struct HistoryChart<'a> {
    points: &'a [ChartPoint],
    title: String,
}

impl<'a> HistoryChart<'a> {
    pub fn new(points: &'a [ChartPoint], symbol: &str) -> Self {
        Self {
            points,
            title: format!(" {} / USD History ", symbol),
        }
    }
}

impl Widget for HistoryChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.points.is_empty() {
            Paragraph::new("No historical data")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let data: Vec<(f64, f64)> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.rate))
            .collect();

        let (min, max) = rate_range(self.points);
        let last_x = (self.points.len().saturating_sub(1)).max(1) as f64;

        let dataset = Dataset::default()
            .name("CRYPTO")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(LINE_COLOR))
            .data(&data);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .title("DATE")
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, last_x])
                    .labels(date_labels(self.points)),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([min, max])
                    .labels(vec![
                        Line::from(format!("{:.3}", min)),
                        Line::from(format!("{:.3}", (min + max) / 2.0)),
                        Line::from(format!("{:.3}", max)),
                    ]),
            );

        chart.render(area, buf);
    }
}

/// Min and max rate with 5% padding; a flat series gets a band around its value
fn rate_range(points: &[ChartPoint]) -> (f64, f64) {
    let min = points.iter().map(|p| p.rate).fold(f64::MAX, f64::min);
    let max = points.iter().map(|p| p.rate).fold(f64::MIN, f64::max);

    if min == max {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
        return (min - pad, max + pad);
    }

    let padding = (max - min) * 0.05;
    (min - padding, max + padding)
}

/// First, middle and last date
fn date_labels(points: &[ChartPoint]) -> Vec<Line<'static>> {
    let mut idx = vec![0, points.len() / 2, points.len() - 1];
    idx.dedup();
    idx.into_iter()
        .map(|i| Line::from(points[i].date.clone()))
        .collect()
}
