// src/core/inspector.rs

//! Value inspection for security headers whose values have known anti-patterns.
//!
//! Each inspected header has one pure check function, looked up by exact key.
//! Headers without a check get the default "Header present" finding, so a new
//! check only needs an entry in `VALUE_CHECKS`.

use crate::core::models::{HeaderValueFinding, Severity};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

type ValueCheck = fn(&str) -> HeaderValueFinding;

/// The registry of value checks, keyed by canonical lowercase header name.
static VALUE_CHECKS: &[(&str, ValueCheck)] = &[
    ("strict-transport-security", check_hsts),
    ("content-security-policy", check_csp),
    ("x-frame-options", check_frame_options),
];

const CSP_UNSAFE_KEYWORDS: &[&str] = &["unsafe-inline", "unsafe-eval"];

static RE_MAX_AGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"max-age=(\d+)").unwrap());

/// Inspects one header value and returns its finding.
///
/// `key` is matched exactly, so callers pass the canonical lowercase name.
pub fn inspect_header_value(key: &str, value: &str) -> HeaderValueFinding {
    match VALUE_CHECKS.iter().find(|(name, _)| *name == key) {
        Some((_, check)) => {
            let finding = check(value);
            debug!(header_name = key, severity = %finding.severity, "Value check applied.");
            finding
        }
        None => default_finding(),
    }
}

fn default_finding() -> HeaderValueFinding {
    HeaderValueFinding::new(Severity::Info, "Header present")
}

fn check_hsts(value: &str) -> HeaderValueFinding {
    let finding = if !value.contains("max-age=") {
        HeaderValueFinding::new(Severity::Medium, "HSTS missing max-age directive")
    } else if !value.contains("includeSubDomains") {
        HeaderValueFinding::new(Severity::Low, "Consider adding includeSubDomains directive")
    } else {
        default_finding()
    };

    let mut finding = match RE_MAX_AGE.captures(value).and_then(|caps| caps[1].parse::<u64>().ok()) {
        Some(seconds) => finding.with_detail(format!("max-age={} ({} days)", seconds, seconds / 86_400)),
        None => finding,
    };
    if value.contains("preload") {
        finding = finding.with_detail("preload requested");
    }
    finding
}

fn check_csp(value: &str) -> HeaderValueFinding {
    let found: Vec<&str> = CSP_UNSAFE_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| value.contains(*keyword))
        .collect();

    if found.is_empty() {
        return default_finding();
    }
    found.into_iter().fold(
        HeaderValueFinding::new(Severity::High, "CSP contains unsafe directives"),
        |finding, keyword| finding.with_detail(format!("'{}' found", keyword)),
    )
}

fn check_frame_options(value: &str) -> HeaderValueFinding {
    if value.to_lowercase() == "allowall" {
        HeaderValueFinding::new(Severity::High, "X-Frame-Options allows framing from any origin")
    } else {
        default_finding()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsts_without_max_age_is_medium() {
        let finding = inspect_header_value("strict-transport-security", "includeSubDomains");
        assert_eq!(finding.severity, Severity::Medium);
        assert_eq!(finding.message, "HSTS missing max-age directive");
        assert!(finding.details.is_empty());
    }

    #[test]
    fn hsts_without_include_subdomains_is_low() {
        let finding = inspect_header_value("strict-transport-security", "max-age=31536000");
        assert_eq!(finding.severity, Severity::Low);
        assert_eq!(finding.message, "Consider adding includeSubDomains directive");
        assert_eq!(finding.details, vec!["max-age=31536000 (365 days)".to_string()]);
    }

    #[test]
    fn hsts_include_subdomains_match_is_case_sensitive() {
        let finding = inspect_header_value("strict-transport-security", "max-age=600; includesubdomains");
        assert_eq!(finding.severity, Severity::Low);
    }

    #[test]
    fn complete_hsts_is_default_finding_with_details() {
        let finding = inspect_header_value(
            "strict-transport-security",
            "max-age=63072000; includeSubDomains; preload",
        );
        assert_eq!(finding.severity, Severity::Info);
        assert_eq!(finding.message, "Header present");
        assert_eq!(finding.details, vec!["max-age=63072000 (730 days)", "preload requested"]);
    }

    #[test]
    fn csp_with_unsafe_keywords_is_high() {
        let finding = inspect_header_value(
            "content-security-policy",
            "default-src 'self'; script-src 'unsafe-eval' 'unsafe-inline'",
        );
        assert_eq!(finding.severity, Severity::High);
        assert_eq!(finding.message, "CSP contains unsafe directives");
        assert_eq!(finding.details, vec!["'unsafe-inline' found", "'unsafe-eval' found"]);
    }

    #[test]
    fn csp_keyword_match_is_case_sensitive() {
        let finding = inspect_header_value("content-security-policy", "script-src 'UNSAFE-INLINE'");
        assert_eq!(finding.severity, Severity::Info);
    }

    #[test]
    fn frame_options_allowall_in_any_case_is_high() {
        for value in ["ALLOWALL", "allowall", "AllowAll"] {
            let finding = inspect_header_value("x-frame-options", value);
            assert_eq!(finding.severity, Severity::High, "value {value}");
        }
        assert_eq!(inspect_header_value("x-frame-options", "allowall; x").severity, Severity::Info);
        assert_eq!(inspect_header_value("x-frame-options", "DENY").severity, Severity::Info);
    }

    #[test]
    fn headers_without_a_check_get_the_default() {
        for key in ["x-content-type-options", "referrer-policy", "permissions-policy", "x-xss-protection"] {
            assert_eq!(inspect_header_value(key, "anything"), default_finding());
        }
    }

    #[test]
    fn dispatch_requires_exact_key() {
        let finding = inspect_header_value("Content-Security-Policy", "script-src 'unsafe-inline'");
        assert_eq!(finding, default_finding());
    }
}
