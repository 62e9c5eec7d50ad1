// src/ui/widgets/footer.rs

use crate::ui::accent;
use header_inspector::app::{App, AppState, Notice};
use ratatui::{prelude::*, widgets::Paragraph};

/// Alternating key/description pairs, rendered as one line.
fn hints(pairs: &[(&'static str, &'static str)], color: Color) -> Line<'static> {
    let spans = pairs.iter().flat_map(|(key, action)| {
        [
            Span::styled(*key, Style::new().bold().fg(color)),
            Span::raw(format!(" {}  ", action)),
        ]
    });
    Line::from(spans.collect::<Vec<_>>())
}

/// Renders the key hints for the current state, followed by the latest notice.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let color = accent(app);
    let mut line = match &app.state {
        AppState::Idle => hints(
            &[("Enter", "headers"), ("F5", "full response"), ("F2", "settings"), ("F1", "help"), ("Esc", "quit")],
            color,
        ),
        AppState::Finished => hints(
            &[
                ("n", "new"),
                ("r", "retry"),
                ("e", "export"),
                ("c", "copy raw"),
                ("Tab", "view"),
                ("t", "type"),
                ("/", "filter"),
                ("s", "settings"),
                ("?", "help"),
                ("q", "quit"),
            ],
            color,
        ),
        AppState::FilterEditing => Line::from(vec![
            Span::raw("Filter: "),
            Span::styled(app.header_filter.clone(), Style::new().fg(Color::Yellow)),
            Span::raw("  "),
            Span::styled("Enter", Style::new().bold().fg(color)),
            Span::raw(" apply"),
        ]),
        AppState::Failed(_) => hints(&[("r", "retry"), ("n", "new"), ("s", "settings"), ("q", "quit")], color),
        AppState::Settings => hints(&[("Enter", "save"), ("d", "defaults"), ("Esc", "cancel")], color),
        AppState::Scanning => hints(&[("q", "quit")], color),
    };

    match &app.notice {
        Notice::Clear => {}
        Notice::Success(message) => line.push_span(Span::styled(message.clone(), Style::new().fg(Color::Green))),
        Notice::Error(message) => line.push_span(Span::styled(message.clone(), Style::new().fg(Color::Red))),
    }

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
