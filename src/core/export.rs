// src/core/export.rs

//! Writes an inspection to disk as pretty-printed JSON.

use crate::core::models::InspectionResult;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Export file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize inspection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// `header-analysis-YYYY-MM-DD.json` for the given day.
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("header-analysis-{}.json", date.format("%Y-%m-%d"))
}

/// Writes `result` into `dir`, creating the directory if needed.
/// The file is named after the inspection's own date; an export from the
/// same day overwrites the previous one.
///
/// # Returns
/// The path of the written file.
pub fn export_inspection(result: &InspectionResult, dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(default_export_file_name(result.timestamp.date_naive()));
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(&path, json)?;
    info!(path = %path.display(), "Inspection exported.");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(default_export_file_name(date), "header-analysis-2024-03-07.json");
    }
}
