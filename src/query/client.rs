use serde_json::Value;

use super::envelope::{ResponseEnvelope, ServiceError};
use super::mode::PreparedRequest;
use super::transport::{QueryTransport, TransportError};

/// Result of one evaluation round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalOutcome {
    Success {
        value: Option<Value>,
    },
    Failure {
        /// Partial value carried by an error response.
        partial: Option<Value>,
        reason: FailureReason,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// The peer answered with a non-success status.
    Service {
        status: u16,
        error: Option<ServiceError>,
    },
    /// No response was received.
    Transport(TransportError),
}

/// How an evaluation ended, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Success,
    /// The peer answered with an error status.
    ServiceFailure,
    /// The peer never answered.
    TransportFailure,
}

impl EvalOutcome {
    pub const fn completion(&self) -> Completion {
        match self {
            Self::Success { .. } => Completion::Success,
            Self::Failure {
                reason: FailureReason::Service { .. },
                ..
            } => Completion::ServiceFailure,
            Self::Failure {
                reason: FailureReason::Transport(_),
                ..
            } => Completion::TransportFailure,
        }
    }
}

/// Sends `request` and classifies the response. Never fails: every
/// problem becomes an [`EvalOutcome::Failure`].
pub async fn evaluate<T: QueryTransport>(transport: &T, request: &PreparedRequest) -> EvalOutcome {
    let response = match transport.send(request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(endpoint = %request.endpoint, error = %err, "Query transport failed");
            return EvalOutcome::Failure {
                partial: None,
                reason: FailureReason::Transport(err),
            };
        }
    };

    tracing::debug!(
        endpoint = %request.endpoint,
        status = response.status,
        body = %response.body,
        "Query response"
    );

    let envelope = ResponseEnvelope::parse(&response.body).unwrap_or_default();

    if response.is_success() {
        EvalOutcome::Success {
            value: envelope.value,
        }
    } else {
        EvalOutcome::Failure {
            partial: envelope.value,
            reason: FailureReason::Service {
                status: response.status,
                error: envelope.error,
            },
        }
    }
}
