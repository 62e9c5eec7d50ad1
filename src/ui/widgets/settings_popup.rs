// src/ui/widgets/settings_popup.rs

use crate::ui::{accent, layout::centered_rect};
use header_inspector::app::{App, SettingsField};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use strum::IntoEnumIterator;

/// Renders the settings form as a popup. The selected row is highlighted;
/// values shown are the unsaved draft.
pub fn render_settings_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.settings_form else { return };
    let color = accent(app);

    let mut lines = vec![Line::from("")];
    for field in SettingsField::iter() {
        let selected = field == form.field;
        let marker = if selected { "> " } else { "  " };
        let row_style = if selected {
            Style::new().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::new()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<24}", marker, field.to_string()), row_style),
            Span::styled(form.value_label(field), row_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Digits/Backspace edit numbers, ←/→ change, ↑/↓ select.").dark_gray());
    lines.push(Line::from("Enter save, D defaults, Esc cancel.").dark_gray());

    let block = Block::default()
        .title("Settings")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let popup_area = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
