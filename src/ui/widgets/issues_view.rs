// src/ui/widgets/issues_view.rs

use header_inspector::app::App;
use header_inspector::core::models::AnalysisReport;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};

fn issue_lines(report: &AnalysisReport) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::raw(format!("ISSUES ({})", report.issues.len())).yellow().bold())];
    if report.issues.is_empty() {
        lines.push(Line::from(Span::styled("  ✓ No security issues found.", Style::default().fg(Color::Green))));
    }
    for issue in &report.issues {
        lines.push(Line::from(vec![
            Span::styled("  ✗ ", Style::default().fg(Color::Red)),
            Span::raw(issue.clone()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::raw(format!("RECOMMENDATIONS ({})", report.recommendations.len())).yellow().bold()));
    for recommendation in &report.recommendations {
        lines.push(Line::from(vec![
            Span::styled("  → ", Style::default().fg(Color::Cyan)),
            Span::raw(recommendation.clone()),
        ]));
    }

    lines
}

/// Renders the issues and recommendations in report order.
pub fn render_issues_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(lines) = app.inspection.as_ref().map(|result| issue_lines(&result.analysis)) else { return };
    app.clamp_scroll(lines.len());

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_row(), 0));
    frame.render_widget(paragraph, area);

    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area,
        &mut app.report_scroll_state,
    );
}
