// src/ui/widgets/help_popup.rs

use crate::ui::{accent, layout::centered_rect};
use header_inspector::app::App;
use header_inspector::core::knowledge_base::{DISCLOSURE_PENALTY, SECURITY_HEADERS};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn key_row(keys: &str, action: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", keys), Style::new().bold().fg(color)),
        Span::raw(action.to_string()),
    ])
}

/// Renders the help popup over the rest of the interface: key bindings and
/// how the score is computed.
pub fn render_help_popup(frame: &mut Frame, app: &App, area: Rect) {
    let color = accent(app);
    let mut text = vec![
        Line::from("KEYS".bold().yellow()),
        key_row("Enter", "Inspect the target with a HEAD request", color),
        key_row("F5", "Fetch the full response with GET", color),
        key_row("Tab", "Next report view", color),
        key_row("Up/Down", "Move selection or scroll", color),
        key_row("t  /", "Header type filter, text filter", color),
        key_row("e", "Export the inspection as JSON", color),
        key_row("c", "Copy the raw response", color),
        key_row("r  n", "Retry, new target", color),
        key_row("s  F2", "Settings", color),
        key_row("?  F1", "This help", color),
        key_row("q  Esc", "Quit (Esc while typing a target)", color),
        Line::from(""),
        Line::from("SCORING".bold().yellow()),
    ];
    for rule in SECURITY_HEADERS {
        text.push(Line::from(format!("  {:<26}{:>3} points", rule.name, rule.weight)));
    }
    text.push(Line::from(format!(
        "  Each Server, X-Powered-By or X-AspNet-Version header costs {} points.",
        DISCLOSURE_PENALTY
    )));
    text.push(Line::from("  Grades: A+ 90, A 80, B 70, C 60, D 50, otherwise F."));
    text.push(Line::from(""));
    text.push(Line::from("Press any key to close.".italic()));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let popup_area = centered_rect(70, 80, area);
    let popup = Paragraph::new(text).block(block).wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}
