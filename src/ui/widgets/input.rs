// src/ui/widgets/input.rs

use crate::ui::accent;
use header_inspector::app::{App, AppState};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const PLACEHOLDER: &str = "https://example.com";

/// Renders the target box. Empty input shows a dimmed example; input typed
/// without a scheme is marked as going over https.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.state == AppState::Idle;
    let border = if editing { Style::new().fg(accent(app)) } else { Style::new() };

    let mut block = Block::default().borders(Borders::ALL).border_style(border).title("Target URL");
    if editing && !app.input.is_empty() && !app.input.contains("://") {
        block = block.title(Line::from(" https:// assumed ").right_aligned().dark_gray());
    }

    let content = if app.input.is_empty() && editing {
        Line::from(PLACEHOLDER).dark_gray()
    } else {
        Line::from(app.input.as_str()).yellow()
    };
    frame.render_widget(Paragraph::new(content).block(block), area);

    if editing {
        let typed = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
        let column = area.x.saturating_add(typed).saturating_add(1);
        let last_column = area.right().saturating_sub(2);
        frame.set_cursor_position(Position::new(column.min(last_column), area.y + 1));
    }
}
