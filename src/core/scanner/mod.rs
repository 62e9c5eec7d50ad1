// src/core/scanner/mod.rs

// This file acts as the public interface for the `scanner` module.
// It validates targets, builds the shared HTTP client, and re-exports the
// two fetch modes.
pub mod headers_scanner;
pub mod response_scanner;

pub use self::headers_scanner::run_inspection;
pub use self::response_scanner::fetch_full_response;

use crate::core::error::FetchError;
use crate::settings::Settings;
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

const USER_AGENT: &str = concat!("HeaderInspector/", env!("CARGO_PKG_VERSION"));

/// Adds an `https://` scheme to input typed without one.
///
/// Input that already names a scheme is returned unchanged, so `ftp://` or
/// `javascript:` targets still reach [`validate_target`] and get rejected there.
pub fn normalize_target(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.contains("://") || trimmed.starts_with("javascript:") || trimmed.starts_with("data:") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Checks that the target is an absolute `http` or `https` URL with a host.
///
/// # Returns
/// The parsed `Url`, or `FetchError::InvalidUrl` carrying the original input.
pub fn validate_target(input: &str) -> Result<Url, FetchError> {
    let trimmed = input.trim();
    let invalid = || FetchError::InvalidUrl(trimmed.to_string());

    let url = Url::parse(trimmed).map_err(|e| {
        debug!(input = trimmed, error = %e, "Target is not a parseable URL.");
        invalid()
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none_or(str::is_empty) {
        debug!(input = trimmed, scheme = url.scheme(), "Target rejected.");
        return Err(invalid());
    }
    Ok(url)
}

/// Builds the HTTP client from the current settings.
///
/// A redirect limit of zero disables following, so the 3xx response itself is
/// inspected.
pub fn build_client(settings: &Settings) -> Result<reqwest::Client, FetchError> {
    let redirect = if settings.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(settings.max_redirects)
    };

    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_millis(settings.timeout_ms))
        .redirect(redirect)
        .build()
        .map_err(|e| {
            error!(error = %e, "Failed to build HTTP client.");
            FetchError::Client(e)
        })
}
