// src/logging.rs

use crate::paths::AppPaths;
use color_eyre::eyre::Result;
use lazy_static::lazy_static;
use std::path::PathBuf;
use time::macros::format_description;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::{self, time::LocalTime};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    /// Crate-specific level variable, read when `RUST_LOG` is unset.
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", env!("CARGO_CRATE_NAME").to_uppercase());
}

/// Picks the first non-blank directive, defaulting to `info` for this crate only.
pub fn filter_directive(rust_log: Option<String>, crate_level: Option<String>) -> String {
    [rust_log, crate_level]
        .into_iter()
        .flatten()
        .find(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Routes tracing output to a log file in the data directory.
///
/// The terminal is owned by the UI, so nothing is written to stdout or stderr.
/// Returns the path of the log file.
pub fn init(paths: &AppPaths) -> Result<PathBuf> {
    std::fs::create_dir_all(&paths.data_dir)?;
    let log_path = paths.log_file();
    let writer = std::fs::File::create(&log_path)?;

    let directive = filter_directive(std::env::var("RUST_LOG").ok(), std::env::var(LOG_ENV.as_str()).ok());
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_timer(LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        )))
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_crate_variable() {
        let directive = filter_directive(Some("debug".to_string()), Some("warn".to_string()));
        assert_eq!(directive, "debug");
    }

    #[test]
    fn blank_values_fall_through() {
        assert_eq!(filter_directive(Some("  ".to_string()), Some("trace".to_string())), "trace");
        assert_eq!(filter_directive(None, Some(String::new())), "header_inspector=info");
        assert_eq!(filter_directive(None, None), "header_inspector=info");
    }

    #[test]
    fn crate_variable_is_upper_snake_case() {
        assert_eq!(LOG_ENV.as_str(), "HEADER_INSPECTOR_LOGLEVEL");
    }
}
