use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use std::path::Path;

use super::CdfView;

/// Chart title derived from the file name: `set_latency.csv` becomes
/// "SET Latency CDF", anything else falls back to "<stem> CDF".
fn chart_title(file: &str) -> String {
    let stem = Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file);
    match stem.strip_suffix("_latency") {
        Some(op) if !op.is_empty() => format!("{} Latency CDF", op.to_uppercase()),
        _ => format!("{stem} CDF"),
    }
}

pub fn draw_cdf(area: Rect, f: &mut Frame, views: &[CdfView], selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    let view = &views[selected];

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("File: "),
            Span::styled(view.report.file.as_str(), Style::default().fg(Color::Yellow)),
            Span::raw(format!(" ({} of {})", selected + 1, views.len())),
        ]),
        Line::from(vec![
            Span::styled("Tab/←/→", Style::default().fg(Color::Magenta)),
            Span::raw(": next file  "),
            Span::styled("q/Esc", Style::default().fg(Color::Magenta)),
            Span::raw(": quit"),
        ]),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, chunks[0]);

    let points = view.cdf.points();
    let (x_min, x_max) = view.cdf.x_bounds();
    // Degenerate samples (one point, or all equal) still need a visible span.
    let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };

    let dataset = Dataset::default()
        .graph_type(GraphType::Line)
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(Color::Green))
        .data(points);

    let x_axis = Axis::default()
        .title("Latency (µs)")
        .style(Style::default().fg(Color::Gray))
        .bounds([x_min, x_max])
        .labels(vec![
            format!("{x_min:.1}"),
            format!("{:.1}", (x_min + x_max) / 2.0),
            format!("{x_max:.1}"),
        ]);
    let y_axis = Axis::default()
        .title("CDF")
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, 1.0])
        .labels(vec!["0.00", "0.50", "1.00"]);

    let chart = Chart::new(vec![dataset]).x_axis(x_axis).y_axis(y_axis).block(
        Block::default()
            .borders(Borders::ALL)
            .title(chart_title(&view.report.file)),
    );
    f.render_widget(chart, chunks[1]);

    let stats = &view.report.stats;
    let footer = Line::from(vec![
        Span::styled("mean", Style::default().fg(Color::Gray)),
        Span::styled(format!(" {}", stats.mean_ns), Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled("med", Style::default().fg(Color::Gray)),
        Span::styled(format!(" {}", stats.median_ns), Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled("p95", Style::default().fg(Color::Gray)),
        Span::styled(format!(" {}", stats.p95_ns), Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled("p99", Style::default().fg(Color::Gray)),
        Span::styled(format!(" {}", stats.p99_ns), Style::default().fg(Color::Green)),
        Span::styled(
            format!(" ns over {} rows", view.report.rows),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::chart_title;

    #[test]
    fn titles_follow_the_benchmark_naming() {
        assert_eq!(chart_title("set_latency.csv"), "SET Latency CDF");
        assert_eq!(chart_title("data/get_latency.csv"), "GET Latency CDF");
        assert_eq!(chart_title("probe.csv"), "probe CDF");
    }
}
