// src/core/scanner/response_scanner.rs

use tracing::{debug, error, info};
use crate::core::error::FetchError;
use crate::core::evaluator::evaluate_with_status;
use crate::core::header_map::HeaderMap;
use crate::core::models::InspectionResult;
use crate::core::scanner::{build_client, validate_target};
use crate::settings::Settings;
use chrono::Utc;

/// Longest body, in characters, kept from a full response.
pub const MAX_BODY_CHARS: usize = 10_000;

/// Fetches the full response with a GET request, keeping the start of the body.
///
/// Headers are analyzed the same way as in [`super::run_inspection`]; the body
/// is truncated to [`MAX_BODY_CHARS`] characters for display.
pub async fn fetch_full_response(target: &str, settings: &Settings) -> Result<InspectionResult, FetchError> {
    let url = validate_target(target)?;
    info!(url = %url, "Starting full response fetch.");

    let client = build_client(settings)?;
    let response = client.get(url.clone()).send().await.map_err(|e| {
        error!(url = %url, error = %e, "GET request failed.");
        FetchError::Request { url: url.to_string(), source: e }
    })?;

    let status = response.status().as_u16();
    let headers = HeaderMap::from(response.headers());
    info!(status, header_count = headers.len(), "Received HTTP response.");

    let text = response.text().await.map_err(|e| {
        error!(error = %e, "Failed to read response body.");
        FetchError::Body(e)
    })?;
    debug!(bytes = text.len(), "Successfully read response body.");

    let analysis = evaluate_with_status(&headers, status);
    Ok(InspectionResult {
        url: url.to_string(),
        status,
        headers,
        analysis,
        body: Some(truncate_chars(&text, MAX_BODY_CHARS).to_string()),
        timestamp: Utc::now(),
    })
}

/// Cuts `text` to at most `limit` characters without splitting a code point.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
