use anyhow::{Context, Result};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use super::mode::PreparedRequest;

/// Client-side bound on a single query call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw HTTP response from a peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A call that produced no response at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("failed to connect to {endpoint}: {reason}")]
    Connect { endpoint: String, reason: String },
    #[error("request failed: {0}")]
    Other(String),
}

/// Sends a prepared request to a peer.
pub trait QueryTransport {
    fn send(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, timeout })
    }

    /// Wraps a preconfigured client. `timeout` must match the one the
    /// client was built with; it is only used to report timeouts.
    pub const fn from_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn classify(&self, endpoint: &str, err: &reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else if err.is_connect() {
            TransportError::Connect {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            }
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

impl QueryTransport for HttpTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<TransportResponse, TransportError> {
        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&request.endpoint)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| self.classify(&request.endpoint, &e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify(&request.endpoint, &e))?;

        Ok(TransportResponse { status, body })
    }
}
