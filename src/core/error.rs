// src/core/error.rs

//! Error types for the inspector library.

use thiserror::Error;

/// Errors surfaced by the public inspection entry points.
#[derive(Error, Debug)]
pub enum InspectorError {
    /// The header input was missing or could not be read as a header map.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while retrieving response headers from a remote server.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The target is not an absolute http(s) URL.
    #[error("Invalid URL '{0}': must be an http:// or https:// address")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed from the current settings.
    #[error("HTTP client initialization error: {0}")]
    Client(#[source] reqwest::Error),

    /// The request itself failed (DNS, connect, TLS, timeout, redirect limit).
    #[error("HTTP request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl FetchError {
    /// True when the underlying cause was the configured timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Client(e) | FetchError::Body(e) => e.is_timeout(),
            FetchError::Request { source, .. } => source.is_timeout(),
            FetchError::InvalidUrl(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_message_names_the_input() {
        let err = FetchError::InvalidUrl("ftp://example.com".to_string());
        assert!(err.to_string().contains("ftp://example.com"));
        assert!(!err.is_timeout());
    }

    #[test]
    fn invalid_input_message_carries_the_reason() {
        let err = InspectorError::InvalidInput("header map is null".to_string());
        assert_eq!(err.to_string(), "Invalid input: header map is null");
    }
}
