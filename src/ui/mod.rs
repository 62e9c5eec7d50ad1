// src/ui/mod.rs

use header_inspector::app::{App, AppState};
use header_inspector::core::models::Severity;
use header_inspector::settings::Theme;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::create_layout(area);

    widgets::input::render_input(frame, app, layout.input);
    widgets::report_view::render_report_view(frame, app, layout.report);
    widgets::summary::render_summary(frame, app, layout.summary);
    widgets::footer::render_footer(frame, app, layout.footer);

    if app.state == AppState::Settings {
        widgets::settings_popup::render_settings_popup(frame, app, area);
    }
    if app.show_help {
        widgets::help_popup::render_help_popup(frame, app, area);
    }
}

/// Highlight color for titles and key hints, following the configured theme.
pub fn accent(app: &App) -> Color {
    match app.settings.theme {
        Theme::Dark => Color::Cyan,
        Theme::Light => Color::Blue,
    }
}

pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::High => Style::default().fg(Color::Red),
        Severity::Medium => Style::default().fg(Color::Yellow),
        Severity::Low => Style::default().fg(Color::LightBlue),
        Severity::Info => Style::default().fg(Color::Green),
    }
}
