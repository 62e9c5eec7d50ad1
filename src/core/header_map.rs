// src/core/header_map.rs

//! A small response-header map with case-insensitive lookup.
//!
//! Names keep the casing they arrived with so the raw header list can be shown
//! and exported as received, while every lookup goes through the lowercase key.

use crate::core::error::InspectorError;
use indexmap::IndexMap;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    value: String,
}

/// Header name to single value, matched case-insensitively, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: IndexMap<String, HeaderEntry>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header. A name already present in any casing has its value
    /// replaced in place; the first-seen casing is kept.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let key = name.to_ascii_lowercase();
        match self.entries.get_mut(&key) {
            Some(entry) => entry.value = value,
            None => {
                self.entries.insert(key, HeaderEntry { name, value });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|entry| entry.value.as_str())
    }

    /// True only for headers with a non-empty value; an empty value is
    /// treated the same as a missing header.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name as received, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }

    /// Builds a map from untyped JSON, the one place where header input is validated.
    ///
    /// `null` and non-object input are rejected. Strings are kept, numbers and
    /// booleans are coerced to text, `null` values are skipped, and nested
    /// arrays or objects are rejected with the offending header named.
    pub fn from_json(value: &Value) -> Result<Self, InspectorError> {
        let object = match value {
            Value::Null => {
                return Err(InspectorError::InvalidInput(
                    "header map is null; pass an empty object to analyze a response without headers".to_string(),
                ));
            }
            Value::Object(object) => object,
            other => {
                return Err(InspectorError::InvalidInput(format!(
                    "header map must be a JSON object, got {}",
                    json_kind(other)
                )));
            }
        };

        let mut headers = HeaderMap::new();
        for (name, raw) in object {
            match raw {
                Value::String(s) => headers.insert(name.as_str(), s.as_str()),
                Value::Number(n) => headers.insert(name.as_str(), n.to_string()),
                Value::Bool(b) => headers.insert(name.as_str(), b.to_string()),
                Value::Null => {
                    debug!(header_name = %name, "Skipping header with null value.");
                }
                other => {
                    warn!(header_name = %name, kind = json_kind(other), "Rejecting header with non-scalar value.");
                    return Err(InspectorError::InvalidInput(format!(
                        "header '{}' has a {} value; only scalar values are accepted",
                        name,
                        json_kind(other)
                    )));
                }
            }
        }
        Ok(headers)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = HeaderMap::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Converts transport headers, keeping only the first value of a repeated name.
/// Values that are not valid UTF-8 are kept as a visible placeholder.
impl From<&reqwest::header::HeaderMap> for HeaderMap {
    fn from(raw: &reqwest::header::HeaderMap) -> Self {
        let mut headers = HeaderMap::new();
        for name in raw.keys() {
            let Some(value) = raw.get(name) else { continue };
            match value.to_str() {
                Ok(s) => headers.insert(name.as_str(), s),
                Err(_) => {
                    warn!(header_name = %name, "Header found but contained invalid UTF-8.");
                    headers.insert(name.as_str(), "[Invalid UTF-8]");
                }
            }
        }
        headers
    }
}

impl Serialize for HeaderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HeaderMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeaderMapVisitor;

        impl<'de> Visitor<'de> for HeaderMapVisitor {
            type Value = HeaderMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of header names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<HeaderMap, A::Error> {
                let mut headers = HeaderMap::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    headers.insert(name, value);
                }
                Ok(headers)
            }
        }

        deserializer.deserialize_map(HeaderMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_ignores_case() {
        let headers: HeaderMap = [("Strict-Transport-Security", "max-age=60")].into_iter().collect();
        assert_eq!(headers.get("strict-transport-security"), Some("max-age=60"));
        assert_eq!(headers.get("STRICT-TRANSPORT-SECURITY"), Some("max-age=60"));
        assert!(headers.contains("Strict-transport-security"));
    }

    #[test]
    fn reinserting_replaces_value_but_keeps_original_casing_and_position() {
        let mut headers = HeaderMap::new();
        headers.insert("Server", "nginx");
        headers.insert("X-Powered-By", "PHP");
        headers.insert("SERVER", "apache");

        let pairs: Vec<_> = headers.iter().collect();
        assert_eq!(pairs, vec![("Server", "apache"), ("X-Powered-By", "PHP")]);
    }

    #[test]
    fn empty_value_does_not_count_as_present() {
        let headers: HeaderMap = [("x-frame-options", "")].into_iter().collect();
        assert_eq!(headers.get("x-frame-options"), Some(""));
        assert!(!headers.contains("x-frame-options"));
    }

    #[test]
    fn from_json_rejects_null_and_non_objects() {
        assert!(matches!(HeaderMap::from_json(&Value::Null), Err(InspectorError::InvalidInput(_))));
        assert!(matches!(HeaderMap::from_json(&json!(["server"])), Err(InspectorError::InvalidInput(_))));
        assert!(matches!(HeaderMap::from_json(&json!("server")), Err(InspectorError::InvalidInput(_))));
    }

    #[test]
    fn from_json_coerces_scalars_and_skips_nulls() {
        let headers = HeaderMap::from_json(&json!({
            "content-length": 1024,
            "x-debug": true,
            "server": null,
            "x-frame-options": "DENY"
        }))
        .unwrap();

        assert_eq!(headers.get("content-length"), Some("1024"));
        assert_eq!(headers.get("x-debug"), Some("true"));
        assert_eq!(headers.get("server"), None);
        assert_eq!(headers.get("x-frame-options"), Some("DENY"));
    }

    #[test]
    fn from_json_names_the_rejected_header() {
        let err = HeaderMap::from_json(&json!({"set-cookie": ["a=1", "b=2"]})).unwrap_err();
        assert!(err.to_string().contains("set-cookie"));
    }

    #[test]
    fn converts_transport_headers_keeping_first_value() {
        let mut raw = reqwest::header::HeaderMap::new();
        raw.append("set-cookie", "a=1".parse().unwrap());
        raw.append("set-cookie", "b=2".parse().unwrap());
        raw.insert("server", "nginx".parse().unwrap());

        let headers = HeaderMap::from(&raw);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("set-cookie"), Some("a=1"));
        assert_eq!(headers.get("Server"), Some("nginx"));
    }

    #[test]
    fn serializes_with_received_names() {
        let headers: HeaderMap = [("X-Frame-Options", "DENY")].into_iter().collect();
        assert_eq!(serde_json::to_value(&headers).unwrap(), json!({"X-Frame-Options": "DENY"}));

        let back: HeaderMap = serde_json::from_value(json!({"Server": "nginx"})).unwrap();
        assert_eq!(back.get("server"), Some("nginx"));
    }
}
