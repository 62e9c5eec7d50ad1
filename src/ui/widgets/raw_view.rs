// src/ui/widgets/raw_view.rs

use header_inspector::app::App;
use header_inspector::core::models::InspectionResult;
use ratatui::{prelude::*, widgets::{Paragraph, Wrap}};

fn raw_lines(result: &InspectionResult) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::raw(format!("{} {}", result.status, result.url)).bold()),
        Line::from(format!("Fetched at {}", result.timestamp.to_rfc3339())).dark_gray(),
        Line::from(""),
    ];
    for (name, value) in result.headers.iter() {
        lines.push(Line::from(format!("{}: {}", name, value)));
    }
    lines.push(Line::from(""));
    match &result.body {
        Some(body) => lines.extend(body.lines().map(|l| Line::from(l.to_string()))),
        None => lines.push(Line::from("Body not fetched. Start a full response request with F5.").italic()),
    }
    lines
}

/// Renders the status line, the headers as received, and the body when the
/// inspection was a full GET.
pub fn render_raw_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(lines) = app.inspection.as_ref().map(raw_lines) else { return };
    app.clamp_scroll(lines.len());

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_row(), 0));
    frame.render_widget(paragraph, area);
}
