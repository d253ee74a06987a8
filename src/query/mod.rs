mod client;
mod envelope;
mod mode;
mod transport;

pub use client::{Completion, EvalOutcome, FailureReason, evaluate};
pub use envelope::{QueryRequest, ResponseEnvelope, ServiceError, render_value};
pub use mode::{EvalMode, PreparedRequest};
pub use transport::{
    DEFAULT_TIMEOUT, HttpTransport, QueryTransport, TransportError, TransportResponse,
};

/// Query endpoint of the public Convex test peer.
pub const DEFAULT_ENDPOINT: &str = "http://peer.convex.live:8080/api/v1/query";
