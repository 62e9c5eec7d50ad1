// src/settings.rs

//! User settings, persisted as JSON in the platform config directory.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Longest request timeout accepted, five minutes.
pub const MAX_TIMEOUT_MS: u64 = 300_000;
pub const MAX_REDIRECTS: usize = 20;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Fetch and interface preferences. Fields missing from a saved file fall
/// back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    pub max_redirects: usize,
    /// Start an inspection as soon as a URL is pasted.
    pub auto_analyze: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            max_redirects: 5,
            auto_analyze: true,
            theme: Theme::Dark,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.timeout_ms == 0 || self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(SettingsError::Invalid {
                field: "timeoutMs",
                message: format!("must be between 1 and {}", MAX_TIMEOUT_MS),
            });
        }
        if self.max_redirects > MAX_REDIRECTS {
            return Err(SettingsError::Invalid {
                field: "maxRedirects",
                message: format!("must be at most {}", MAX_REDIRECTS),
            });
        }
        Ok(())
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults.");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&raw)?;
        settings.validate()?;
        info!(path = %path.display(), "Settings loaded.");
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), "Settings saved.");
        Ok(())
    }

    /// Like [`Settings::load_from`], but any error falls back to the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Could not load settings, using defaults.");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS_FILE: &str = "settings.json";

    #[test]
    fn defaults_match_the_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.timeout_ms, 10_000);
        assert_eq!(settings.max_redirects, 5);
        assert!(settings.auto_analyze);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let settings = Settings { timeout_ms: 2_500, max_redirects: 0, auto_analyze: false, theme: Theme::Light };

        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"theme": "light"}"#).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.theme, Theme::Light);
        assert_eq!(loaded.timeout_ms, 10_000);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let settings = Settings { timeout_ms: 0, ..Settings::default() };
        match settings.validate() {
            Err(SettingsError::Invalid { field, message }) => {
                assert_eq!(field, "timeoutMs");
                assert!(message.contains("between 1 and 300000"));
            }
            other => panic!("expected invalid setting, got {:?}", other),
        }
    }

    #[test]
    fn limits_are_inclusive() {
        let at_limit = Settings { timeout_ms: MAX_TIMEOUT_MS, max_redirects: MAX_REDIRECTS, ..Settings::default() };
        assert!(at_limit.validate().is_ok());

        let too_many = Settings { max_redirects: MAX_REDIRECTS + 1, ..Settings::default() };
        assert!(matches!(too_many.validate(), Err(SettingsError::Invalid { field: "maxRedirects", .. })));
    }

    #[test]
    fn unreadable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"timeoutMs": 0}"#).unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Settings::load_from(&path), Err(SettingsError::Parse(_))));
    }
}
