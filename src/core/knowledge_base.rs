//! This module is the static, read-only rule set of the inspector.
//! It lists the security headers that earn points, the headers that leak
//! server details and cost points, and the categories used to label the
//! raw header list.

use crate::core::header_map::HeaderMap;
use crate::core::models::{HeaderValueFinding, Severity};
use std::fmt;
use strum::EnumIter;

/// Points subtracted for every disclosure header present in a response.
pub const DISCLOSURE_PENALTY: i32 = 5;

/// A security header that contributes to the score when present.
#[derive(Debug)]
pub struct SecurityHeaderRule {
    /// Canonical lowercase header name.
    pub key: &'static str,
    /// Short name used in issues and recommendations (e.g. "HSTS").
    pub name: &'static str,
    pub weight: u32,
    pub description: &'static str,
}

/// A header that reveals implementation details useful for fingerprinting.
#[derive(Debug)]
pub struct DisclosureHeaderRule {
    pub key: &'static str,
}

/// The security header catalog, in the order issues and recommendations are emitted.
///
/// The weights add up to 85, not 100, so a response sending every header
/// still tops out at 85 and grades A.
pub static SECURITY_HEADERS: &[SecurityHeaderRule] = &[
    SecurityHeaderRule {
        key: "strict-transport-security",
        name: "HSTS",
        weight: 15,
        description: "HTTP Strict Transport Security",
    },
    SecurityHeaderRule {
        key: "content-security-policy",
        name: "CSP",
        weight: 20,
        description: "Content Security Policy",
    },
    SecurityHeaderRule {
        key: "x-frame-options",
        name: "X-Frame-Options",
        weight: 10,
        description: "Clickjacking Protection",
    },
    SecurityHeaderRule {
        key: "x-content-type-options",
        name: "X-Content-Type-Options",
        weight: 10,
        description: "MIME Type Sniffing Protection",
    },
    SecurityHeaderRule {
        key: "referrer-policy",
        name: "Referrer-Policy",
        weight: 10,
        description: "Referrer Information Control",
    },
    SecurityHeaderRule {
        key: "permissions-policy",
        name: "Permissions-Policy",
        weight: 15,
        description: "Feature Policy Control",
    },
    SecurityHeaderRule {
        key: "x-xss-protection",
        name: "X-XSS-Protection",
        weight: 5,
        description: "XSS Filter (Legacy)",
    },
];

/// The disclosure header catalog, checked after the security headers.
pub static DISCLOSURE_HEADERS: &[DisclosureHeaderRule] = &[
    DisclosureHeaderRule { key: "server" },
    DisclosureHeaderRule { key: "x-powered-by" },
    DisclosureHeaderRule { key: "x-aspnet-version" },
];

// Recognized as security headers in the raw list even though they are not scored.
const EXTRA_SECURITY_HEADERS: &[&str] = &["expect-ct", "feature-policy"];

const CACHE_HEADERS: &[&str] = &[
    "cache-control",
    "expires",
    "etag",
    "last-modified",
    "if-none-match",
    "if-modified-since",
    "pragma",
];

const CONTENT_HEADERS: &[&str] = &[
    "content-type",
    "content-length",
    "content-encoding",
    "content-disposition",
    "content-language",
    "content-range",
    "accept-ranges",
];

/// Finds the catalog rule for a header name, in any casing.
pub fn security_rule(name: &str) -> Option<&'static SecurityHeaderRule> {
    let key = name.to_ascii_lowercase();
    SECURITY_HEADERS.iter().find(|rule| rule.key == key)
}

pub fn is_disclosure_header(name: &str) -> bool {
    let key = name.to_ascii_lowercase();
    DISCLOSURE_HEADERS.iter().any(|rule| rule.key == key)
}

/// Counts the scored security headers present in a response.
pub fn count_security_headers(headers: &HeaderMap) -> usize {
    SECURITY_HEADERS
        .iter()
        .filter(|rule| headers.contains(rule.key))
        .count()
}

/// Groups used to label and filter the raw header list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum HeaderCategory {
    Security,
    Cache,
    Content,
    Disclosure,
    Other,
}

impl HeaderCategory {
    pub fn classify(name: &str) -> Self {
        let key = name.to_ascii_lowercase();
        let key = key.as_str();
        if security_rule(key).is_some() || EXTRA_SECURITY_HEADERS.contains(&key) {
            HeaderCategory::Security
        } else if is_disclosure_header(key) {
            HeaderCategory::Disclosure
        } else if CACHE_HEADERS.contains(&key) {
            HeaderCategory::Cache
        } else if CONTENT_HEADERS.contains(&key) {
            HeaderCategory::Content
        } else {
            HeaderCategory::Other
        }
    }

    /// The short note shown next to a raw header of this category.
    pub fn note(&self) -> HeaderValueFinding {
        match self {
            HeaderCategory::Security => HeaderValueFinding::new(Severity::Info, "Security header present"),
            HeaderCategory::Disclosure => HeaderValueFinding::new(Severity::Medium, "Information disclosure"),
            _ => HeaderValueFinding::new(Severity::Info, "Standard header"),
        }
    }
}

impl fmt::Display for HeaderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderCategory::Security => write!(f, "Security"),
            HeaderCategory::Cache => write!(f, "Cache"),
            HeaderCategory::Content => write!(f, "Content"),
            HeaderCategory::Disclosure => write!(f, "Disclosure"),
            HeaderCategory::Other => write!(f, "Other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_weights_sum_to_85() {
        let total: u32 = SECURITY_HEADERS.iter().map(|r| r.weight).sum();
        assert_eq!(total, 85);
        assert_eq!(SECURITY_HEADERS.len(), 7);
        assert_eq!(DISCLOSURE_HEADERS.len(), 3);
    }

    #[test]
    fn catalog_keys_are_lowercase() {
        for rule in SECURITY_HEADERS {
            assert_eq!(rule.key, rule.key.to_ascii_lowercase());
        }
        for rule in DISCLOSURE_HEADERS {
            assert_eq!(rule.key, rule.key.to_ascii_lowercase());
        }
    }

    #[test]
    fn rule_lookup_ignores_case() {
        assert_eq!(security_rule("Content-Security-Policy").map(|r| r.weight), Some(20));
        assert!(security_rule("server").is_none());
        assert!(is_disclosure_header("X-Powered-By"));
        assert!(!is_disclosure_header("x-frame-options"));
    }

    #[test]
    fn classifies_raw_headers() {
        assert_eq!(HeaderCategory::classify("Strict-Transport-Security"), HeaderCategory::Security);
        assert_eq!(HeaderCategory::classify("expect-ct"), HeaderCategory::Security);
        assert_eq!(HeaderCategory::classify("ETag"), HeaderCategory::Cache);
        assert_eq!(HeaderCategory::classify("content-type"), HeaderCategory::Content);
        assert_eq!(HeaderCategory::classify("Server"), HeaderCategory::Disclosure);
        assert_eq!(HeaderCategory::classify("x-request-id"), HeaderCategory::Other);
    }

    #[test]
    fn disclosure_note_is_medium() {
        let note = HeaderCategory::Disclosure.note();
        assert_eq!(note.severity, Severity::Medium);
        assert_eq!(note.message, "Information disclosure");
        assert_eq!(HeaderCategory::Cache.note().message, "Standard header");
    }

    #[test]
    fn counts_present_security_headers() {
        let headers: HeaderMap = [
            ("X-Frame-Options", "DENY"),
            ("Referrer-Policy", "no-referrer"),
            ("x-xss-protection", ""),
            ("server", "nginx"),
        ]
        .into_iter()
        .collect();
        assert_eq!(count_security_headers(&headers), 2);
    }
}
