// src/ui/widgets/headers_view.rs

use crate::ui::severity_style;
use header_inspector::app::{App, AppState};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the raw response headers, filtered by category and text.
pub fn render_headers_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.filtered_headers().len().max(1);
    app.clamp_scroll(visible);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let category = app.category_filter.map_or("All".to_string(), |c| c.to_string());
    let filter_style = if app.state == AppState::FilterEditing {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let filter_line = Line::from(vec![
        Span::raw("Type: "),
        Span::styled(category, Style::default().bold()),
        Span::raw("   Filter: "),
        Span::styled(
            if app.header_filter.is_empty() { "(none)".to_string() } else { app.header_filter.clone() },
            filter_style,
        ),
    ]);
    frame.render_widget(
        Paragraph::new(filter_line).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    let headers = app.filtered_headers();
    let lines: Vec<Line> = if headers.is_empty() {
        vec![Line::from("No headers match the current filter.")]
    } else {
        headers
            .into_iter()
            .map(|(name, value, category)| {
                let note = category.note();
                Line::from(vec![
                    Span::styled(format!("{}: ", name), Style::default().bold()),
                    Span::raw(value.to_string()),
                    Span::raw("  "),
                    Span::styled(format!("({})", note.message), severity_style(note.severity)),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).scroll((app.scroll_row(), 0));
    frame.render_widget(paragraph, chunks[1]);
}
