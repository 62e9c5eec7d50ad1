// src/app.rs

use crate::core::error::FetchError;
use crate::core::export::export_inspection;
use crate::core::knowledge_base::{count_security_headers, HeaderCategory, SECURITY_HEADERS};
use crate::core::models::{Grade, HeaderReport, InspectionResult, Severity};
use crate::core::scanner::{normalize_target, validate_target};
use crate::paths::AppPaths;
use crate::settings::{Settings, Theme, MAX_REDIRECTS, MAX_TIMEOUT_MS};
use ratatui::widgets::{ListState, ScrollbarState};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{info, warn};

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// How much the displayed score grows per tick while animating.
const SCORE_ANIMATION_STEP: u32 = 3;

/// Step used by the arrow keys on the timeout field.
const TIMEOUT_STEP_MS: u64 = 1_000;

/// One-line outcome of the last export, copy or settings save, shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Clear,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Scanning,
    Finished,
    Failed(String),
    /// Typing into the header filter while a report is shown.
    FilterEditing,
    /// The settings form is open.
    Settings,
}

/// Which request an inspection uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// HEAD request, headers only.
    Headers,
    /// GET request, headers plus the start of the body.
    FullResponse,
}

/// A validated request ready to be handed to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub url: String,
    pub mode: FetchMode,
}

/// Work the event loop performs outside the app state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scan(ScanRequest),
    /// Put the text on the terminal's clipboard.
    CopyText(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTab {
    Analysis,
    Issues,
    Headers,
    Raw,
}

impl ReportTab {
    pub const ALL: [ReportTab; 4] = [ReportTab::Analysis, ReportTab::Issues, ReportTab::Headers, ReportTab::Raw];

    pub fn next(self) -> Self {
        match self {
            ReportTab::Analysis => ReportTab::Issues,
            ReportTab::Issues => ReportTab::Headers,
            ReportTab::Headers => ReportTab::Raw,
            ReportTab::Raw => ReportTab::Analysis,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportTab::Analysis => "Analysis",
            ReportTab::Issues => "Issues",
            ReportTab::Headers => "Headers",
            ReportTab::Raw => "Raw",
        }
    }
}

/// Rows of the settings form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SettingsField {
    #[strum(serialize = "Timeout")]
    Timeout,
    #[strum(serialize = "Max redirects")]
    MaxRedirects,
    #[strum(serialize = "Auto-analyze on paste")]
    AutoAnalyze,
    #[strum(serialize = "Theme")]
    Theme,
}

/// Settings being edited. Changes stay in `draft` until saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub draft: Settings,
    pub field: SettingsField,
    return_to: AppState,
}

impl SettingsForm {
    fn new(draft: Settings, return_to: AppState) -> Self {
        Self { draft, field: SettingsField::Timeout, return_to }
    }

    pub fn select_next(&mut self) {
        let current = self.field;
        self.field = SettingsField::iter()
            .cycle()
            .skip_while(|field| *field != current)
            .nth(1)
            .unwrap_or(SettingsField::Timeout);
    }

    pub fn select_previous(&mut self) {
        let fields: Vec<SettingsField> = SettingsField::iter().collect();
        let index = fields.iter().position(|field| *field == self.field).unwrap_or(0);
        self.field = fields[(index + fields.len() - 1) % fields.len()];
    }

    pub fn value_label(&self, field: SettingsField) -> String {
        match field {
            SettingsField::Timeout => format!("{} ms", self.draft.timeout_ms),
            SettingsField::MaxRedirects => self.draft.max_redirects.to_string(),
            SettingsField::AutoAnalyze => String::from(if self.draft.auto_analyze { "On" } else { "Off" }),
            SettingsField::Theme => match self.draft.theme {
                Theme::Dark => "Dark".to_string(),
                Theme::Light => "Light".to_string(),
            },
        }
    }

    /// Appends a digit to the selected numeric field. Digits that would push
    /// the value past its limit are ignored.
    pub fn push_digit(&mut self, digit: u32) {
        match self.field {
            SettingsField::Timeout => {
                let next = self.draft.timeout_ms.saturating_mul(10).saturating_add(u64::from(digit));
                if next <= MAX_TIMEOUT_MS {
                    self.draft.timeout_ms = next;
                }
            }
            SettingsField::MaxRedirects => {
                let next = self.draft.max_redirects.saturating_mul(10).saturating_add(digit as usize);
                if next <= MAX_REDIRECTS {
                    self.draft.max_redirects = next;
                }
            }
            SettingsField::AutoAnalyze | SettingsField::Theme => {}
        }
    }

    pub fn pop_digit(&mut self) {
        match self.field {
            SettingsField::Timeout => self.draft.timeout_ms /= 10,
            SettingsField::MaxRedirects => self.draft.max_redirects /= 10,
            SettingsField::AutoAnalyze | SettingsField::Theme => {}
        }
    }

    /// Left/Right on the selected field: steps numbers, flips the rest.
    pub fn step(&mut self, forward: bool) {
        let draft = &mut self.draft;
        match self.field {
            SettingsField::Timeout => {
                draft.timeout_ms = if forward {
                    (draft.timeout_ms + TIMEOUT_STEP_MS).min(MAX_TIMEOUT_MS)
                } else {
                    draft.timeout_ms.saturating_sub(TIMEOUT_STEP_MS)
                };
            }
            SettingsField::MaxRedirects => {
                draft.max_redirects = if forward {
                    (draft.max_redirects + 1).min(MAX_REDIRECTS)
                } else {
                    draft.max_redirects.saturating_sub(1)
                };
            }
            SettingsField::AutoAnalyze => draft.auto_analyze = !draft.auto_analyze,
            SettingsField::Theme => {
                draft.theme = match draft.theme {
                    Theme::Dark => Theme::Light,
                    Theme::Light => Theme::Dark,
                };
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub score: u32,
    pub max_score: u32,
    pub grade: Option<Grade>,
    pub status: u16,
    pub header_count: usize,
    pub security_headers_found: usize,
    pub high_findings: usize,
    pub medium_findings: usize,
    pub low_findings: usize,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input: String,
    pub settings: Settings,
    pub paths: AppPaths,
    pub inspection: Option<InspectionResult>,
    pub last_request: Option<ScanRequest>,
    pub summary: ScanSummary,
    pub displayed_score: u32,
    pub spinner_frame: usize,
    pub tab: ReportTab,
    pub analysis_list_state: ListState,
    pub scroll_offset: usize,
    /// Last line a scrolled view may start at; set when the view is drawn.
    pub scroll_max: usize,
    pub report_scroll_state: ScrollbarState,
    pub header_filter: String,
    pub category_filter: Option<HeaderCategory>,
    pub settings_form: Option<SettingsForm>,
    pub show_help: bool,
    pub notice: Notice,
}

impl App {
    pub fn new(settings: Settings, paths: AppPaths) -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input: String::new(),
            settings,
            paths,
            inspection: None,
            last_request: None,
            summary: ScanSummary::default(),
            displayed_score: 0,
            spinner_frame: 0,
            tab: ReportTab::Analysis,
            analysis_list_state: ListState::default(),
            scroll_offset: 0,
            scroll_max: 0,
            report_scroll_state: ScrollbarState::default(),
            header_filter: String::new(),
            category_filter: None,
            settings_form: None,
            show_help: false,
            notice: Notice::Clear,
        }
    }

    /// Validates the typed target and moves to `Scanning`.
    ///
    /// Returns the request to run, or `None` after switching to `Failed` with
    /// a message when the input is empty or not an http(s) URL.
    pub fn begin_scan(&mut self, mode: FetchMode) -> Option<ScanRequest> {
        if self.input.trim().is_empty() {
            self.state = AppState::Failed("Please enter a valid URL".to_string());
            return None;
        }
        let target = normalize_target(&self.input);
        match validate_target(&target) {
            Ok(url) => {
                let request = ScanRequest { url: url.to_string(), mode };
                info!(url = %request.url, mode = ?mode, "Scan requested.");
                self.start(request.clone());
                Some(request)
            }
            Err(e) => {
                warn!(error = %e, "Scan request rejected.");
                self.state = AppState::Failed(
                    "Please enter a valid URL (must be an http:// or https:// address)".to_string(),
                );
                None
            }
        }
    }

    /// Re-runs the last request, if there was one.
    pub fn retry(&mut self) -> Option<ScanRequest> {
        let request = self.last_request.clone()?;
        self.start(request.clone());
        Some(request)
    }

    fn start(&mut self, request: ScanRequest) {
        self.last_request = Some(request);
        self.inspection = None;
        self.summary = ScanSummary::default();
        self.displayed_score = 0;
        self.notice = Notice::Clear;
        self.state = AppState::Scanning;
    }

    /// Stores the outcome of a scan started with `begin_scan` or `retry`.
    pub fn finish_scan(&mut self, outcome: Result<InspectionResult, FetchError>) {
        match outcome {
            Ok(result) => {
                self.tab = if result.body.is_some() { ReportTab::Raw } else { ReportTab::Analysis };
                self.inspection = Some(result);
                self.state = AppState::Finished;
                self.reset_scroll();
                self.analysis_list_state.select(Some(0));
                self.update_summary();
            }
            Err(e) => {
                self.state = AppState::Failed(e.to_string());
            }
        }
    }

    pub fn update_summary(&mut self) {
        if let Some(result) = &self.inspection {
            let report = &result.analysis;
            self.summary = ScanSummary {
                score: report.score,
                max_score: report.max_score,
                grade: Some(report.grade),
                status: result.status,
                header_count: result.headers.len(),
                security_headers_found: count_security_headers(&result.headers),
                high_findings: report.count_severity(Severity::High),
                medium_findings: report.count_severity(Severity::Medium),
                low_findings: report.count_severity(Severity::Low),
            };
        }
    }

    /// Advances the spinner and animates the score gauge toward the real score.
    pub fn on_tick(&mut self) {
        match self.state {
            AppState::Scanning => {
                self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
            }
            AppState::Finished | AppState::FilterEditing | AppState::Settings => {
                self.displayed_score = (self.displayed_score + SCORE_ANIMATION_STEP).min(self.summary.score);
            }
            _ => {}
        }
    }

    /// The catalog header currently highlighted in the analysis list.
    pub fn selected_header(&self) -> Option<(&str, &HeaderReport)> {
        let index = self.analysis_list_state.selected()?;
        let report = &self.inspection.as_ref()?.analysis;
        report
            .headers
            .get_index(index)
            .map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn scroll_up(&mut self) {
        if self.tab == ReportTab::Analysis {
            let current = self.analysis_list_state.selected().unwrap_or(0);
            self.analysis_list_state.select(Some(current.saturating_sub(1)));
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(1);
            self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
        }
    }

    pub fn scroll_down(&mut self) {
        if self.tab == ReportTab::Analysis {
            let last = SECURITY_HEADERS.len() - 1;
            let next = self.analysis_list_state.selected().map_or(0, |i| (i + 1).min(last));
            self.analysis_list_state.select(Some(next));
        } else {
            self.scroll_offset = (self.scroll_offset + 1).min(self.scroll_max);
            self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
        }
    }

    /// Records how many lines the current view has and pulls the offset back
    /// inside them. Called by the scrolled views on every draw.
    pub fn clamp_scroll(&mut self, content_lines: usize) {
        self.scroll_max = content_lines.saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(self.scroll_max);
        self.report_scroll_state = self
            .report_scroll_state
            .content_length(content_lines)
            .position(self.scroll_offset);
    }

    /// Scroll offset as a ratatui row, saturating instead of wrapping.
    pub fn scroll_row(&self) -> u16 {
        u16::try_from(self.scroll_offset).unwrap_or(u16::MAX)
    }

    fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
        self.scroll_max = 0;
        self.report_scroll_state = ScrollbarState::default();
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.reset_scroll();
    }

    /// Cycles All, then each category in declaration order, then back to All.
    pub fn cycle_category_filter(&mut self) {
        let mut categories = HeaderCategory::iter();
        self.category_filter = match self.category_filter {
            None => categories.next(),
            Some(current) => categories.skip_while(|category| *category != current).nth(1),
        };
    }

    pub fn start_filter_editing(&mut self) {
        if self.state == AppState::Finished {
            self.tab = ReportTab::Headers;
            self.state = AppState::FilterEditing;
        }
    }

    pub fn stop_filter_editing(&mut self) {
        if self.state == AppState::FilterEditing {
            self.state = AppState::Finished;
        }
    }

    /// Raw response headers matching the category filter and the text filter.
    /// The text filter is a case-insensitive substring of the name or value.
    pub fn filtered_headers(&self) -> Vec<(&str, &str, HeaderCategory)> {
        let Some(result) = &self.inspection else {
            return Vec::new();
        };
        let query = self.header_filter.to_lowercase();
        result
            .headers
            .iter()
            .map(|(name, value)| (name, value, HeaderCategory::classify(name)))
            .filter(|(_, _, category)| self.category_filter.is_none_or(|wanted| wanted == *category))
            .filter(|(name, value, _)| {
                query.is_empty()
                    || name.to_lowercase().contains(&query)
                    || value.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Exports the current inspection into the export directory and records
    /// the outcome.
    pub fn export(&mut self) {
        self.notice = match &self.inspection {
            None => Notice::Error("No results to export".to_string()),
            Some(result) => match export_inspection(result, &self.paths.export_dir()) {
                Ok(path) => Notice::Success(format!("Exported to {}", path.display())),
                Err(e) => Notice::Error(format!("Export failed: {}", e)),
            },
        };
    }

    /// The raw response text to place on the clipboard.
    pub fn copy_raw_response(&mut self) -> Option<Command> {
        match &self.inspection {
            Some(result) => Some(Command::CopyText(result.raw_text())),
            None => {
                self.notice = Notice::Error("No response to copy".to_string());
                None
            }
        }
    }

    pub fn copy_finished(&mut self, outcome: std::io::Result<()>) {
        self.notice = match outcome {
            Ok(()) => Notice::Success("Raw response copied to clipboard".to_string()),
            Err(e) => {
                warn!(error = %e, "Clipboard write failed.");
                Notice::Error(format!("Copy failed: {}", e))
            }
        };
    }

    /// Opens the settings form on a copy of the current settings.
    pub fn open_settings(&mut self) {
        if matches!(self.state, AppState::Idle | AppState::Finished | AppState::Failed(_)) {
            self.settings_form = Some(SettingsForm::new(self.settings.clone(), self.state.clone()));
            self.state = AppState::Settings;
        }
    }

    /// Closes the form without saving and returns to the previous screen.
    pub fn close_settings(&mut self) {
        if let Some(form) = self.settings_form.take() {
            self.state = form.return_to;
        }
    }

    /// Puts the defaults into the form. Nothing is written until saved.
    pub fn reset_settings_form(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.draft = Settings::default();
        }
    }

    /// Validates and persists the draft, then applies it. On failure the form
    /// stays open and the error is shown in the footer.
    pub fn save_settings(&mut self) {
        let Some(form) = &self.settings_form else { return };
        let path = self.paths.settings_file();
        match form.draft.save_to(&path) {
            Ok(()) => {
                self.settings = form.draft.clone();
                self.notice = Notice::Success(format!("Settings saved to {}", path.display()));
                self.close_settings();
            }
            Err(e) => {
                warn!(error = %e, "Settings not saved.");
                self.notice = Notice::Error(format!("Settings not saved: {}", e));
            }
        }
    }

    pub fn quit(&mut self) { self.should_quit = true; }

    pub fn reset(&mut self) {
        let settings = self.settings.clone();
        let paths = self.paths.clone();
        *self = Self::new(settings, paths);
    }
}
