// src/core/models.rs

use crate::core::header_map::HeaderMap;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::Display;

/// The nominal ceiling every score is reported against.
pub const MAX_SCORE: u32 = 100;

// --- Findings ---

/// How serious a single header finding is.
/// Ordered from least to most severe so findings can be compared directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
}

/// The verdict produced by inspecting one header value for known anti-patterns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderValueFinding {
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl HeaderValueFinding {
    pub fn new(severity: Severity, message: &str) -> Self {
        Self { severity, message: message.to_string(), details: Vec::new() }
    }

    /// Appends one detail line, keeping insertion order.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// The finding recorded for a catalog header the response did not send.
    pub fn not_present() -> Self {
        Self::new(Severity::High, "Header not present")
    }
}

// --- Grading ---

/// Letter summary of a final score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
pub enum Grade {
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Maps a clamped score to its grade. Thresholds are inclusive lower bounds,
    /// checked from the top down.
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Grade::APlus,
            80..=89 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Grade::APlus => "Excellent security configuration",
            Grade::A => "Very good security configuration",
            Grade::B => "Good security configuration",
            Grade::C => "Average security configuration",
            Grade::D => "Poor security configuration",
            Grade::F => "Very poor security configuration",
        }
    }
}

// --- Report ---

/// Per-header entry of the report, one for each security catalog header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderReport {
    pub present: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub analysis: HeaderValueFinding,
}

/// The complete result of evaluating one set of response headers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub score: u32,
    pub max_score: u32,
    pub grade: Grade,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    /// Keyed by canonical lowercase header name, in catalog order.
    pub headers: IndexMap<String, HeaderReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl AnalysisReport {
    /// Number of per-header findings at the given severity, missing headers included.
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.headers.values().filter(|h| h.analysis.severity == severity).count()
    }

    /// Number of catalog headers the response actually sent.
    pub fn present_count(&self) -> usize {
        self.headers.values().filter(|h| h.present).count()
    }
}

// --- Inspection Envelope ---

/// A fetched response together with its analysis, as shown and exported by the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionResult {
    pub url: String,
    pub status: u16,
    pub headers: HeaderMap,
    pub analysis: AnalysisReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl InspectionResult {
    /// The response as plain text: status line, headers as received, then the
    /// body if one was fetched.
    pub fn raw_text(&self) -> String {
        let mut text = format!("HTTP {} {}\n", self.status, self.url);
        for (name, value) in self.headers.iter() {
            text.push_str(&format!("{}: {}\n", name, value));
        }
        if let Some(body) = &self.body {
            text.push('\n');
            text.push_str(body);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(Grade::from_score(100), Grade::APlus);
        assert_eq!(Grade::from_score(90), Grade::APlus);
        assert_eq!(Grade::from_score(89), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(59), Grade::D);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn grade_and_severity_render_as_in_report_json() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(Severity::Medium.to_string(), "medium");
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
    }

    #[test]
    fn finding_details_are_omitted_when_empty() {
        let finding = HeaderValueFinding::new(Severity::Info, "Header present");
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json, serde_json::json!({"severity": "info", "message": "Header present"}));
    }

    #[test]
    fn raw_text_lists_headers_then_body() {
        let headers: HeaderMap = [("Server", "nginx"), ("X-Frame-Options", "DENY")].into_iter().collect();
        let mut result = InspectionResult {
            url: "https://example.com/".to_string(),
            status: 200,
            analysis: crate::core::evaluator::evaluate(&headers),
            headers,
            body: None,
            timestamp: Utc::now(),
        };
        assert_eq!(
            result.raw_text(),
            "HTTP 200 https://example.com/\nServer: nginx\nX-Frame-Options: DENY\n"
        );

        result.body = Some("<html></html>".to_string());
        assert!(result.raw_text().ends_with("DENY\n\n<html></html>"));
    }

    #[test]
    fn severities_are_ordered() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Low > Severity::Info);
    }
}
