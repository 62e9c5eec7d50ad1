// src/ui/widgets/analysis_view.rs

use crate::ui::severity_style;
use header_inspector::app::App;
use header_inspector::core::knowledge_base::security_rule;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    text::Line,
};

/// Renders one row per catalog security header, and the selected header's
/// finding underneath.
pub fn render_analysis_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(result) = &app.inspection else { return };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    let items: Vec<ListItem> = result.analysis.headers.iter().map(|(key, entry)| {
        let name = security_rule(key).map_or(key.as_str(), |rule| rule.name);
        let (icon, icon_style) = if entry.present {
            ("✓ ", Style::default().fg(Color::Green))
        } else {
            ("✗ ", Style::default().fg(Color::Red))
        };
        ListItem::new(Line::from(vec![
            Span::styled(icon, icon_style),
            Span::raw(format!("{:<24}", name)),
            Span::styled(format!("[{}] ", entry.analysis.severity), severity_style(entry.analysis.severity)),
            Span::raw(entry.analysis.message.as_str()),
        ]))
    }).collect();

    let findings_list = List::new(items)
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(findings_list, chunks[0], &mut app.analysis_list_state);

    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    let Some((key, entry)) = app.selected_header() else {
        frame.render_widget(
            Paragraph::new("Select a header above to see details.").alignment(Alignment::Center).block(detail_block),
            chunks[1],
        );
        return;
    };

    let mut text = vec![
        Line::from(""),
        Line::from("HEADER:".yellow().bold()),
        Line::from(key),
        Line::from(""),
        Line::from("VALUE:".yellow().bold()),
        Line::from(entry.value.as_deref().unwrap_or("(not sent)")),
        Line::from(""),
        Line::from("FINDING:".yellow().bold()),
        Line::from(Span::styled(
            format!("[{}] {}", entry.analysis.severity, entry.analysis.message),
            severity_style(entry.analysis.severity),
        )),
    ];
    for detail in &entry.analysis.details {
        text.push(Line::from(format!("  - {}", detail)));
    }
    if !entry.present {
        if let Some(rule) = security_rule(key) {
            text.push(Line::from(""));
            text.push(Line::from("HOW TO FIX:".yellow().bold()));
            text.push(Line::from(format!("Add {}: {}", rule.name, rule.description)));
        }
    }

    let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(detail_block);
    frame.render_widget(p, chunks[1]);
}
