// src/keymap.rs

//! Key and paste handling for each application state.

use crate::app::{App, AppState, Command, FetchMode};
use crossterm::event::KeyCode;

/// Applies a key press to `app`.
///
/// F1 toggles help and F2 opens settings from any screen that allows it;
/// while help is shown, any key only closes it. Returns the work the event
/// loop has to run, if the key started any.
pub fn handle_key(app: &mut App, code: KeyCode) -> Option<Command> {
    if app.show_help {
        app.show_help = false;
        return None;
    }
    match code {
        KeyCode::F(1) => {
            app.show_help = true;
            return None;
        }
        KeyCode::F(2) => {
            app.open_settings();
            return None;
        }
        _ => {}
    }

    match app.state {
        AppState::Idle => handle_idle(app, code),
        AppState::Scanning => {
            if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                app.quit();
            }
            None
        }
        AppState::Finished => handle_finished(app, code),
        AppState::Failed(_) => handle_failed(app, code),
        AppState::FilterEditing => {
            handle_filter(app, code);
            None
        }
        AppState::Settings => {
            handle_settings(app, code);
            None
        }
    }
}

/// Appends pasted text to the target; starts a headers inspection right away
/// when auto-analyze is on.
pub fn handle_paste(app: &mut App, text: &str) -> Option<Command> {
    if app.state != AppState::Idle || app.show_help {
        return None;
    }
    app.input.push_str(text.trim());
    if app.settings.auto_analyze {
        app.begin_scan(FetchMode::Headers).map(Command::Scan)
    } else {
        None
    }
}

// Every printable key is part of the URL here, so only Esc quits.
fn handle_idle(app: &mut App, code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => return app.begin_scan(FetchMode::Headers).map(Command::Scan),
        KeyCode::F(5) => return app.begin_scan(FetchMode::FullResponse).map(Command::Scan),
        _ => {}
    }
    None
}

fn handle_finished(app: &mut App, code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Char('r') => return app.retry().map(Command::Scan),
        KeyCode::Char('e') => app.export(),
        KeyCode::Char('c') => return app.copy_raw_response(),
        KeyCode::Char('s') => app.open_settings(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('t') => app.cycle_category_filter(),
        KeyCode::Char('/') => app.start_filter_editing(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
    None
}

fn handle_failed(app: &mut App, code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') | KeyCode::Esc => app.reset(),
        KeyCode::Char('r') => return app.retry().map(Command::Scan),
        KeyCode::Char('s') => app.open_settings(),
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
    None
}

fn handle_filter(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Esc => app.stop_filter_editing(),
        KeyCode::Char(c) => app.header_filter.push(c),
        KeyCode::Backspace => {
            app.header_filter.pop();
        }
        _ => {}
    }
}

fn handle_settings(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.close_settings(),
        KeyCode::Enter => app.save_settings(),
        KeyCode::Char('d') => app.reset_settings_form(),
        _ => {
            let Some(form) = app.settings_form.as_mut() else { return };
            match code {
                KeyCode::Up => form.select_previous(),
                KeyCode::Down | KeyCode::Tab => form.select_next(),
                KeyCode::Left => form.step(false),
                KeyCode::Right | KeyCode::Char(' ') => form.step(true),
                KeyCode::Backspace => form.pop_digit(),
                KeyCode::Char(c) => {
                    if let Some(digit) = c.to_digit(10) {
                        form.push_digit(digit);
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Notice, SettingsField};
    use crate::paths::AppPaths;
    use crate::settings::{Settings, Theme};
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        App::new(Settings::default(), AppPaths::rooted_at(dir.path()))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(handle_key(app, KeyCode::Char(c)), None);
        }
    }

    #[test]
    fn idle_keys_type_into_the_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        type_text(&mut app, "quiz.example/?q=1");
        assert_eq!(app.input, "quiz.example/?q=1");
        assert!(!app.should_quit);

        handle_key(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "quiz.example/?q=");
    }

    #[test]
    fn escape_quits_from_idle() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        handle_key(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn enter_and_f5_pick_the_fetch_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        type_text(&mut app, "example.com");
        match handle_key(&mut app, KeyCode::Enter) {
            Some(Command::Scan(request)) => {
                assert_eq!(request.url, "https://example.com/");
                assert_eq!(request.mode, FetchMode::Headers);
            }
            other => panic!("expected a scan, got {:?}", other),
        }

        let mut app = app_in(&dir);
        type_text(&mut app, "http://example.com");
        assert!(matches!(
            handle_key(&mut app, KeyCode::F(5)),
            Some(Command::Scan(request)) if request.mode == FetchMode::FullResponse
        ));
        assert_eq!(app.state, AppState::Scanning);
    }

    #[test]
    fn paste_starts_a_scan_only_with_auto_analyze() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        assert!(matches!(handle_paste(&mut app, " example.com\n"), Some(Command::Scan(_))));

        let mut app = app_in(&dir);
        app.settings.auto_analyze = false;
        assert_eq!(handle_paste(&mut app, "example.com"), None);
        assert_eq!(app.input, "example.com");
        assert_eq!(app.state, AppState::Idle);
    }

    #[test]
    fn help_swallows_the_next_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        handle_key(&mut app, KeyCode::F(1));
        assert!(app.show_help);

        handle_key(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
        assert!(app.input.is_empty());
    }

    #[test]
    fn settings_are_edited_and_saved_from_the_keyboard() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        handle_key(&mut app, KeyCode::F(2));
        assert_eq!(app.state, AppState::Settings);

        for _ in 0..5 {
            handle_key(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "2500");
        handle_key(&mut app, KeyCode::Up);
        assert_eq!(app.settings_form.as_ref().unwrap().field, SettingsField::Theme);
        handle_key(&mut app, KeyCode::Right);
        handle_key(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Idle);
        assert_eq!(app.settings.timeout_ms, 2_500);
        assert_eq!(app.settings.theme, Theme::Light);
        assert_eq!(Settings::load_from(&app.paths.settings_file()).unwrap(), app.settings);
    }

    #[test]
    fn zero_timeout_keeps_the_form_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        handle_key(&mut app, KeyCode::F(2));
        for _ in 0..5 {
            handle_key(&mut app, KeyCode::Backspace);
        }
        handle_key(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Settings);
        assert!(matches!(app.notice, Notice::Error(_)));

        handle_key(&mut app, KeyCode::Char('d'));
        handle_key(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Idle);
        assert_eq!(app.settings, Settings::default());
    }

    #[test]
    fn escape_discards_settings_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        handle_key(&mut app, KeyCode::F(2));
        handle_key(&mut app, KeyCode::Down);
        handle_key(&mut app, KeyCode::Down);
        handle_key(&mut app, KeyCode::Char(' '));
        handle_key(&mut app, KeyCode::Esc);

        assert_eq!(app.state, AppState::Idle);
        assert!(app.settings.auto_analyze);
        assert!(!app.paths.settings_file().exists());
    }

    #[test]
    fn q_quits_while_scanning() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        type_text(&mut app, "example.com");
        handle_key(&mut app, KeyCode::Enter);
        handle_key(&mut app, KeyCode::F(2));
        assert_eq!(app.state, AppState::Scanning);
        handle_key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
