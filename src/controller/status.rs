//! Controller status payload

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed `GET /api/status` response.
///
/// Only the `summary` field is interpreted; the rest is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControllerStatus {
    raw: Value,
}

impl ControllerStatus {
    /// Wrap a raw JSON document
    #[must_use]
    pub const fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Human-readable summary, if the controller sent one.
    ///
    /// Strings are returned verbatim, other non-null values as compact JSON.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        match self.raw.get("summary")? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// The full response document
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_string() {
        let status = ControllerStatus::new(json!({"summary": "T=28.1C RH=61%", "uptime": 5}));
        assert_eq!(status.summary().as_deref(), Some("T=28.1C RH=61%"));
    }

    #[test]
    fn test_summary_missing() {
        let status = ControllerStatus::new(json!({"uptime": 5}));
        assert_eq!(status.summary(), None);
    }

    #[test]
    fn test_summary_null() {
        let status = ControllerStatus::new(json!({"summary": null}));
        assert_eq!(status.summary(), None);
    }

    #[test]
    fn test_summary_non_string_rendered_as_json() {
        let status = ControllerStatus::new(json!({"summary": {"temp": 28}}));
        assert_eq!(status.summary().as_deref(), Some(r#"{"temp":28}"#));
    }

    #[test]
    fn test_summary_of_non_object_document() {
        let status = ControllerStatus::new(json!([1, 2, 3]));
        assert_eq!(status.summary(), None);
    }

    #[test]
    fn test_deserializes_transparently() {
        let status: ControllerStatus = serde_json::from_str(r#"{"summary":"ok"}"#).unwrap();
        assert_eq!(status.raw()["summary"], "ok");
    }
}
