//! Grades the security headers of an HTTP response.
//!
//! The evaluator in [`core::evaluator`] is pure: it takes a [`HeaderMap`] and
//! returns an [`AnalysisReport`] with a score, a letter grade, issues, and
//! recommendations. The rest of the crate fetches headers, persists settings,
//! and drives the terminal front end.

pub mod app;
pub mod core;
pub mod keymap;
pub mod logging;
pub mod paths;
pub mod settings;

pub use crate::core::error::{FetchError, InspectorError};
pub use crate::core::evaluator::{evaluate, evaluate_json, evaluate_with_status};
pub use crate::core::header_map::HeaderMap;
pub use crate::core::models::{AnalysisReport, Grade, HeaderValueFinding, InspectionResult, Severity};
