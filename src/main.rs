// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    clipboard::CopyToClipboard,
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use header_inspector::app::{App, Command, FetchMode, ScanRequest};
use header_inspector::core::error::FetchError;
use header_inspector::core::models::InspectionResult;
use header_inspector::core::scanner;
use header_inspector::keymap::{handle_key, handle_paste};
use header_inspector::logging;
use header_inspector::paths::AppPaths;
use header_inspector::settings::Settings;
use ratatui::backend::Backend;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

mod ui;

type ScanOutcome = Result<InspectionResult, FetchError>;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let paths = AppPaths::discover();
    let log_path = logging::init(&paths)?;
    info!(log = %log_path.display(), "Header inspector starting.");

    let settings = Settings::load_or_default(&paths.settings_file());

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    stdout().execute(EnableBracketedPaste)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, App::new(settings, paths)).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableBracketedPaste)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;

    if let Err(e) = &result {
        error!(error = %e, "Header inspector exited with an error.");
    }
    result
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<ScanOutcome>(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            let command = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(&mut app, key.code),
                Event::Paste(text) => handle_paste(&mut app, &text),
                _ => None,
            };
            match command {
                Some(Command::Scan(request)) => spawn_scan(request, &app.settings, &tx),
                Some(Command::CopyText(text)) => {
                    let outcome = stdout().execute(CopyToClipboard::to_clipboard_from(text)).map(|_| ());
                    app.copy_finished(outcome);
                }
                None => {}
            }
        } else {
            app.on_tick();
        }

        if let Ok(outcome) = rx.try_recv() {
            app.finish_scan(outcome);
        }
    }
    Ok(())
}

/// Runs the request on a background task and sends the outcome back to the UI loop.
fn spawn_scan(request: ScanRequest, settings: &Settings, tx: &mpsc::Sender<ScanOutcome>) {
    let tx = tx.clone();
    let settings = settings.clone();
    tokio::spawn(async move {
        let outcome = match request.mode {
            FetchMode::Headers => scanner::run_inspection(&request.url, &settings).await,
            FetchMode::FullResponse => scanner::fetch_full_response(&request.url, &settings).await,
        };
        let _ = tx.send(outcome).await;
    });
}
