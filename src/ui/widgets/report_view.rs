// src/ui/widgets/report_view.rs

use crate::ui::accent;
use crate::ui::widgets::{analysis_view, headers_view, issues_view, raw_view};
use header_inspector::app::{App, AppState, ReportTab, SPINNER_CHARS};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

/// Renders the report area: a placeholder while idle or scanning, the error
/// when a scan failed, otherwise the tab bar and the selected view.
pub fn render_report_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Header Report (Tab to switch view, ↑ ↓ to navigate)");

    match &app.state {
        AppState::Idle | AppState::Settings if app.inspection.is_none() => {
            let content = Paragraph::new("Enter a URL such as https://example.com and press Enter.")
                .alignment(Alignment::Center);
            frame.render_widget(content.block(main_block), area);
            return;
        }
        AppState::Scanning => {
            let spinner_char = SPINNER_CHARS[app.spinner_frame];
            let content = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", spinner_char), Style::default().fg(accent(app))),
                Span::raw("Fetching headers... Please wait."),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(content.block(main_block), area);
            return;
        }
        AppState::Failed(message) => {
            let content = Paragraph::new(vec![
                Line::from("REQUEST FAILED".bold().red()),
                Line::from(""),
                Line::from(message.as_str()),
            ])
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
            frame.render_widget(content.block(main_block), area);
            return;
        }
        AppState::Idle | AppState::Finished | AppState::FilterEditing | AppState::Settings => {}
    }

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner_area);

    let selected = ReportTab::ALL.iter().position(|t| *t == app.tab).unwrap_or(0);
    let tabs = Tabs::new(ReportTab::ALL.iter().map(|t| t.title()))
        .select(selected)
        .highlight_style(Style::default().fg(accent(app)).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(tabs, chunks[0]);

    match app.tab {
        ReportTab::Analysis => analysis_view::render_analysis_view(frame, app, chunks[1]),
        ReportTab::Issues => issues_view::render_issues_view(frame, app, chunks[1]),
        ReportTab::Headers => headers_view::render_headers_view(frame, app, chunks[1]),
        ReportTab::Raw => raw_view::render_raw_view(frame, app, chunks[1]),
    }
}
