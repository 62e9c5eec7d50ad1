// src/core/scanner/headers_scanner.rs

use tracing::{error, info};
use crate::core::error::FetchError;
use crate::core::evaluator::evaluate_with_status;
use crate::core::header_map::HeaderMap;
use crate::core::models::InspectionResult;
use crate::core::scanner::{build_client, validate_target};
use crate::settings::Settings;
use chrono::Utc;

/// Fetches the target's response headers with a HEAD request and analyzes them.
///
/// Any status code is accepted; a 404 or 500 still has headers worth grading.
///
/// # Arguments
/// * `target` - An absolute `http` or `https` URL.
/// * `settings` - Timeout and redirect limits for the request.
///
/// # Returns
/// An `InspectionResult` without a body, or a `FetchError` if the URL is
/// invalid or the request fails.
pub async fn run_inspection(target: &str, settings: &Settings) -> Result<InspectionResult, FetchError> {
    let url = validate_target(target)?;
    info!(url = %url, "Starting headers inspection.");

    let client = build_client(settings)?;
    let response = client.head(url.clone()).send().await.map_err(|e| {
        error!(url = %url, error = %e, "HEAD request failed.");
        FetchError::Request { url: url.to_string(), source: e }
    })?;

    let status = response.status().as_u16();
    info!(status, "Received HTTP response for headers inspection.");

    let headers = HeaderMap::from(response.headers());
    let analysis = evaluate_with_status(&headers, status);
    info!(score = analysis.score, grade = %analysis.grade, "Headers inspection finished.");

    Ok(InspectionResult {
        url: url.to_string(),
        status,
        headers,
        analysis,
        body: None,
        timestamp: Utc::now(),
    })
}
