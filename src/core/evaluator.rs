// src/core/evaluator.rs

use crate::core::error::InspectorError;
use crate::core::header_map::HeaderMap;
use crate::core::inspector::inspect_header_value;
use crate::core::knowledge_base::{DISCLOSURE_HEADERS, DISCLOSURE_PENALTY, SECURITY_HEADERS};
use crate::core::models::{AnalysisReport, Grade, HeaderReport, HeaderValueFinding, MAX_SCORE};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

/// Evaluates a set of response headers and builds the full analysis report.
///
/// Security headers are scanned first, in catalog order, adding their weight
/// when present and recording a missing-header issue otherwise. Disclosure
/// headers are scanned second and each one subtracts a fixed penalty. The
/// score is clamped at zero once, after both scans, and the grade is derived
/// from the clamped score alone.
///
/// # Arguments
/// * `headers` - The response headers. Names are matched case-insensitively.
///
/// # Returns
/// A fresh `AnalysisReport`; the input map is left untouched.
pub fn evaluate(headers: &HeaderMap) -> AnalysisReport {
    debug!(header_count = headers.len(), "Evaluating response headers.");

    let mut running: i32 = 0;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();
    let mut per_header = IndexMap::with_capacity(SECURITY_HEADERS.len());

    for rule in SECURITY_HEADERS {
        let entry = match headers.get(rule.key).filter(|v| !v.is_empty()) {
            Some(value) => {
                running += rule.weight as i32;
                debug!(header_name = rule.key, weight = rule.weight, "Security header present.");
                HeaderReport {
                    present: true,
                    value: Some(value.to_string()),
                    analysis: inspect_header_value(rule.key, value),
                }
            }
            None => {
                debug!(header_name = rule.key, "Security header missing.");
                issues.push(format!("Missing {} header", rule.name));
                recommendations.push(format!("Add {}: {}", rule.name, rule.description));
                HeaderReport {
                    present: false,
                    value: None,
                    analysis: HeaderValueFinding::not_present(),
                }
            }
        };
        per_header.insert(rule.key.to_string(), entry);
    }

    for rule in DISCLOSURE_HEADERS {
        if headers.contains(rule.key) {
            debug!(header_name = rule.key, "Disclosure header present, applying penalty.");
            issues.push(format!("Information disclosure: {} header reveals server details", rule.key));
            recommendations.push(format!("Remove or obfuscate {} header", rule.key));
            running -= DISCLOSURE_PENALTY;
        }
    }

    let score = running.max(0) as u32;
    let grade = Grade::from_score(score);
    info!(score, grade = %grade, issues = issues.len(), "Header evaluation finished.");

    AnalysisReport {
        score,
        max_score: MAX_SCORE,
        grade,
        issues,
        recommendations,
        headers: per_header,
        status: None,
    }
}

/// Same as [`evaluate`], carrying the response status code through to the report.
/// The status plays no part in scoring.
pub fn evaluate_with_status(headers: &HeaderMap, status: u16) -> AnalysisReport {
    AnalysisReport { status: Some(status), ..evaluate(headers) }
}

/// Evaluates headers given as untyped JSON, validating the input first.
///
/// `null` is rejected rather than treated as an empty map, so an
/// all-headers-missing report is only produced when asked for explicitly.
pub fn evaluate_json(input: &Value) -> Result<AnalysisReport, InspectorError> {
    let headers = HeaderMap::from_json(input)?;
    Ok(evaluate(&headers))
}
