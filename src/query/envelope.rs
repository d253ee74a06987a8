//! Wire types for the peer query API.
//!
//! Peers have been observed to report errors in three shapes:
//! `"error": "text"`, `"errorCode": "CODE"` and
//! `"error": { "code": ..., "message": ... }`. All of them are folded
//! into [`ServiceError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a query submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Convex Lisp source to evaluate.
    pub source: String,
}

/// Canonical error reported by a peer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    /// Machine-readable error code (e.g. `ARITY`, `UNDECLARED`).
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

impl ServiceError {
    /// Text shown to the user: the message if present, otherwise the code.
    pub fn describe(&self) -> Option<&str> {
        let non_empty = |s: &&str| !s.is_empty();
        self.message
            .as_deref()
            .filter(non_empty)
            .or_else(|| self.code.as_deref().filter(non_empty))
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Message(String),
    Detailed(ServiceError),
}

/// Response body as sent by the peer, before normalization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    error: Option<ErrorField>,
    #[serde(default)]
    error_code: Option<String>,
}

/// Normalized response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseEnvelope {
    /// Evaluated (or partial) value. JSON `null` is treated as absent.
    pub value: Option<Value>,
    /// Error reported by the peer, if any.
    pub error: Option<ServiceError>,
}

impl ResponseEnvelope {
    /// Parses a response body. Returns `None` when the body is not a JSON object.
    pub fn parse(body: &str) -> Option<Self> {
        let raw: RawEnvelope = serde_json::from_str(body).ok()?;

        let error = match (raw.error, raw.error_code) {
            (Some(ErrorField::Detailed(mut detail)), code) => {
                if detail.code.is_none() {
                    detail.code = code;
                }
                Some(detail)
            }
            (Some(ErrorField::Message(message)), code) => Some(ServiceError {
                code,
                message: Some(message),
            }),
            (None, Some(code)) => Some(ServiceError {
                code: Some(code),
                message: None,
            }),
            (None, None) => None,
        };

        Some(Self {
            value: raw.value.filter(|v| !v.is_null()),
            error,
        })
    }
}

/// Renders a value the way the REPL prints it: strings verbatim, anything
/// else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_source_field() {
        let request = QueryRequest {
            source: "(+ 2 3)".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"source": "(+ 2 3)"})
        );
    }

    #[test]
    fn test_parse_success_body() {
        let envelope = ResponseEnvelope::parse(r#"{"value": "5"}"#).unwrap();
        assert_eq!(envelope.value, Some(json!("5")));
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_parse_error_message() {
        let envelope = ResponseEnvelope::parse(r#"{"error": "Unknown function"}"#).unwrap();
        assert!(envelope.value.is_none());
        assert_eq!(
            envelope.error.unwrap().describe(),
            Some("Unknown function")
        );
    }

    #[test]
    fn test_parse_error_code_with_partial_value() {
        let envelope =
            ResponseEnvelope::parse(r#"{"value": "42", "errorCode": "ARITY"}"#).unwrap();
        assert_eq!(envelope.value, Some(json!("42")));
        let error = envelope.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("ARITY"));
        assert_eq!(error.describe(), Some("ARITY"));
    }

    #[test]
    fn test_parse_canonical_error_object() {
        let envelope = ResponseEnvelope::parse(
            r#"{"error": {"code": "CAST", "message": "Can't cast to Long"}}"#,
        )
        .unwrap();
        let error = envelope.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("CAST"));
        assert_eq!(error.describe(), Some("Can't cast to Long"));
    }

    #[test]
    fn test_parse_message_and_code_together() {
        let envelope =
            ResponseEnvelope::parse(r#"{"error": "bad arity", "errorCode": "ARITY"}"#).unwrap();
        let error = envelope.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("ARITY"));
        assert_eq!(error.describe(), Some("bad arity"));
    }

    #[test]
    fn test_parse_null_value_is_absent() {
        let envelope = ResponseEnvelope::parse(r#"{"value": null}"#).unwrap();
        assert!(envelope.value.is_none());
    }

    #[test]
    fn test_parse_non_json_body() {
        assert!(ResponseEnvelope::parse("<html>502 Bad Gateway</html>").is_none());
        assert!(ResponseEnvelope::parse("").is_none());
    }

    #[test]
    fn test_describe_empty_error() {
        assert_eq!(ServiceError::default().describe(), None);
        let blank = ServiceError {
            code: None,
            message: Some(String::new()),
        };
        assert_eq!(blank.describe(), None);
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("5")), "5");
        assert_eq!(render_value(&json!(5)), "5");
        assert_eq!(render_value(&json!([1, 2])), "[1,2]");
        assert_eq!(render_value(&json!(true)), "true");
    }
}
