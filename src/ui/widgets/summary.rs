// src/ui/widgets/summary.rs

use header_inspector::app::{App, AppState};
use header_inspector::core::knowledge_base::SECURITY_HEADERS;
use header_inspector::core::models::Grade;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
    text::Line,
};

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::APlus | Grade::A => Color::Green,
        Grade::B => Color::Cyan,
        Grade::C | Grade::D => Color::Yellow,
        Grade::F => Color::Red,
    }
}

/// Renders the summary widget: score and grade, an animated gauge, and counts
/// of findings. Empty until an inspection has finished.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Score & Grade section
            Constraint::Length(1), // Gauge chart
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Response section
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Findings section
        ])
        .split(area);

    if matches!(app.state, AppState::Scanning | AppState::Failed(_)) {
        return;
    }
    let Some(grade) = app.summary.grade else { return };

    // --- Score & Grade Section ---
    let style = Style::default().fg(grade_color(grade));
    let score_text = Text::from(vec![
        Line::from("Security Score".bold()),
        Line::from(format!("{}/{}", app.summary.score, app.summary.max_score)).style(style),
        Line::from(Span::styled(format!("Grade {}", grade), style.add_modifier(Modifier::BOLD))),
        Line::from(grade.description()).style(style),
    ]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), summary_chunks[0]);

    // --- Gauge Chart (Animated) ---
    let percent = (app.displayed_score * 100 / app.summary.max_score.max(1)).min(100) as u16;
    let score_gauge = Gauge::default()
        .percent(percent)
        .label("")
        .gauge_style(Style::default().fg(grade_color(Grade::from_score(app.displayed_score))));
    frame.render_widget(score_gauge, summary_chunks[1]);

    // --- Response Section ---
    let response_lines = vec![
        Line::from("RESPONSE".bold()),
        Line::from(format!("Status: {}", app.summary.status)),
        Line::from(format!("Headers: {}", app.summary.header_count)),
        Line::from(format!(
            "Security headers: {}/{}",
            app.summary.security_headers_found,
            SECURITY_HEADERS.len()
        )),
    ];
    frame.render_widget(Paragraph::new(response_lines), summary_chunks[3]);

    // --- Findings Section ---
    let findings_text = Text::from(vec![
        Line::from("FINDINGS".bold()),
        Line::from(vec![Span::raw("High: "), Span::styled(app.summary.high_findings.to_string(), Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("Medium: "), Span::styled(app.summary.medium_findings.to_string(), Style::default().fg(Color::Yellow))]),
        Line::from(vec![Span::raw("Low: "), Span::styled(app.summary.low_findings.to_string(), Style::default().fg(Color::LightBlue))]),
    ]);
    frame.render_widget(Paragraph::new(findings_text), summary_chunks[5]);
}
