#![allow(clippy::unwrap_used)]
//! End-to-end tests of the submission cycle over real HTTP.

mod common;

use common::{Reply, closed_endpoint, serve_once};
use convex_repl::query::{EvalMode, HttpTransport, QueryTransport, TransportError};
use convex_repl::repl::{FALLBACK_ERROR, ReplController, SubmitOutcome};
use serde_json::json;
use std::time::Duration;

// Bypasses any proxy configured in the environment; the responder is local.
fn transport(timeout: Duration) -> HttpTransport {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .unwrap();
    HttpTransport::from_client(client, timeout)
}

fn controller(endpoint: &str, timeout: Duration) -> ReplController<HttpTransport> {
    ReplController::new(transport(timeout), endpoint, EvalMode::Query)
}

#[tokio::test]
async fn test_success_round_trip() {
    let (endpoint, server) = serve_once(Reply::Json {
        status: 200,
        body: r#"{"value": "5"}"#,
    })
    .await;
    let repl = controller(&endpoint, Duration::from_secs(10));

    let outcome = repl.submit("(+ 2 3)").await;

    assert_eq!(outcome, SubmitOutcome::Recorded(0));
    let history = repl.history();
    assert_eq!(history[0].input, "(+ 2 3)");
    assert_eq!(history[0].output, Some(json!("5")));
    assert!(history[0].error.is_none());

    let request = server.await.unwrap();
    assert!(request.request_line().starts_with("POST /api/v1/query"));
    assert_eq!(request.header("content-type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, json!({"source": "(+ 2 3)"}));
}

#[tokio::test]
async fn test_service_error_message() {
    let (endpoint, _server) = serve_once(Reply::Json {
        status: 400,
        body: r#"{"error": "Unknown function"}"#,
    })
    .await;
    let repl = controller(&endpoint, Duration::from_secs(10));

    repl.submit("(bad-fn)").await;

    let history = repl.history();
    assert!(history[0].output.is_none());
    assert_eq!(history[0].error.as_deref(), Some("Unknown function"));
    assert!(!repl.is_loading());
}

#[tokio::test]
async fn test_partial_value_with_error_code() {
    let (endpoint, _server) = serve_once(Reply::Json {
        status: 400,
        body: r#"{"value": "42", "errorCode": "ARITY"}"#,
    })
    .await;
    let repl = controller(&endpoint, Duration::from_secs(10));

    repl.submit("(inc 1 2)").await;

    let history = repl.history();
    assert_eq!(history[0].output, Some(json!("42")));
    assert_eq!(history[0].error.as_deref(), Some("ARITY"));
}

#[tokio::test]
async fn test_unstructured_error_body_falls_back() {
    let (endpoint, _server) = serve_once(Reply::Json {
        status: 502,
        body: "upstream unavailable",
    })
    .await;
    let repl = controller(&endpoint, Duration::from_secs(10));

    repl.submit("(+ 1 1)").await;

    let history = repl.history();
    assert!(history[0].output.is_none());
    assert_eq!(history[0].error.as_deref(), Some(FALLBACK_ERROR));
}

#[tokio::test]
async fn test_timeout_becomes_history_entry() {
    let (endpoint, _server) = serve_once(Reply::Hang).await;
    let repl = controller(&endpoint, Duration::from_millis(200));

    let outcome = repl.submit("(+ 1 1)").await;

    assert_eq!(outcome, SubmitOutcome::Recorded(0));
    let history = repl.history();
    assert!(history[0].output.is_none());
    assert_eq!(history[0].error.as_deref(), Some(FALLBACK_ERROR));
    assert!(!repl.is_loading());
}

#[tokio::test]
async fn test_transport_reports_timeout() {
    let (endpoint, _server) = serve_once(Reply::Hang).await;
    let transport = transport(Duration::from_millis(200));
    let request = EvalMode::Query.prepare(&endpoint, "(+ 1 1)");

    let err = transport.send(&request).await.unwrap_err();

    assert_eq!(err, TransportError::Timeout(Duration::from_millis(200)));
}

#[tokio::test]
async fn test_connection_refused() {
    let endpoint = closed_endpoint().await;
    let repl = controller(&endpoint, Duration::from_secs(10));

    repl.submit("(+ 1 1)").await;

    let history = repl.history();
    assert_eq!(history[0].error.as_deref(), Some(FALLBACK_ERROR));
    assert!(history[0].output.is_none());
}

#[tokio::test]
async fn test_transact_mode_sends_same_body() {
    let (endpoint, server) = serve_once(Reply::Json {
        status: 200,
        body: r#"{"value": "1"}"#,
    })
    .await;
    let repl = controller(&endpoint, Duration::from_secs(10));
    repl.set_mode(EvalMode::Transact);

    repl.submit("(def x 1)").await;

    let request = server.await.unwrap();
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, json!({"source": "(def x 1)"}));
}
