use serde::Serialize;
use serde_json::Value;

use crate::query::{EvalOutcome, FailureReason};

/// Shown when no response arrived or the peer's error body was unusable.
pub const FALLBACK_ERROR: &str = "Network error or invalid expression";

/// One evaluated submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub input: String,
    pub output: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HistoryEntry {
    pub fn from_outcome(input: String, outcome: EvalOutcome) -> Self {
        match outcome {
            EvalOutcome::Success { value } => Self {
                input,
                output: value,
                error: None,
            },
            EvalOutcome::Failure {
                partial,
                reason: FailureReason::Service { error, .. },
            } => {
                let message = error
                    .as_ref()
                    .and_then(|e| e.describe())
                    .unwrap_or(FALLBACK_ERROR)
                    .to_string();
                Self {
                    input,
                    output: partial,
                    error: Some(message),
                }
            }
            EvalOutcome::Failure {
                reason: FailureReason::Transport(_),
                ..
            } => Self {
                input,
                output: None,
                error: Some(FALLBACK_ERROR.to_string()),
            },
        }
    }
}
