//! Research pipeline integration tests.
//!
//! These tests drive `ResearchOrchestrator::execute` end to end:
//! - Successful round trip through mock and HTTP backends
//! - Validation failures that never touch the backend
//! - Remote failures and malformed responses

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cognita_core::{
    testing::{fixtures, MockResearchApi},
    ReshapeError, ResearchError, ResearchOrchestrator, SummarizedResult,
};

/// Test helper holding an orchestrator and the mock behind it.
struct TestHarness {
    orchestrator: ResearchOrchestrator,
    api: MockResearchApi,
}

impl TestHarness {
    fn new() -> Self {
        let api = MockResearchApi::new();
        let orchestrator = ResearchOrchestrator::new(
            fixtures::settings("http://dummyapi.com"),
            Arc::new(api.clone()),
        )
        .unwrap();
        Self { orchestrator, api }
    }
}

#[tokio::test]
async fn test_round_trip_with_mock_api() {
    let harness = TestHarness::new();
    harness
        .api
        .set_response(fixtures::research_response(
            "Test summary",
            &["Test Source"],
            0.99,
        ))
        .await;

    let result = harness
        .orchestrator
        .execute("What are the latest advancements in AI?")
        .await
        .unwrap();

    assert_eq!(
        result,
        SummarizedResult {
            final_summary: "Test summary".to_string(),
            sources: vec!["Test Source".to_string()],
            confidence: 0.99,
        }
    );
    assert_eq!(harness.api.query_count().await, 1);
}

#[tokio::test]
async fn test_short_query_fails_before_network() {
    let harness = TestHarness::new();

    let err = harness.orchestrator.execute("short").await.unwrap_err();

    assert!(matches!(err, ResearchError::Validation(_)));
    assert!(!err.is_retryable());
    assert_eq!(harness.api.query_count().await, 0);
}

#[tokio::test]
async fn test_whitespace_padded_short_query_fails() {
    let harness = TestHarness::new();

    let err = harness
        .orchestrator
        .execute("        tiny        ")
        .await
        .unwrap_err();

    assert!(matches!(err, ResearchError::Validation(_)));
    assert_eq!(harness.api.query_count().await, 0);
}

#[tokio::test]
async fn test_connection_failure_is_remote_error() {
    let harness = TestHarness::new();
    harness
        .api
        .set_next_error(cognita_core::RemoteCallError::Connection(
            "Simulated network error".to_string(),
        ))
        .await;

    let err = harness
        .orchestrator
        .execute("A valid research query?")
        .await
        .unwrap_err();

    assert!(matches!(err, ResearchError::RemoteCall(_)));
    assert!(err.is_retryable());
    assert!(err.to_string().contains("Simulated network error"));
}

#[tokio::test]
async fn test_empty_response_yields_defaults() {
    let harness = TestHarness::new();
    harness.api.set_response(json!({})).await;

    let result = harness
        .orchestrator
        .execute("Investigate renewable energy markets.")
        .await
        .unwrap();

    assert_eq!(result.final_summary, "No summary available");
    assert!(result.sources.is_empty());
    assert_eq!(result.confidence, 0.0);
}

#[tokio::test]
async fn test_non_object_response_is_reshape_error() {
    let harness = TestHarness::new();
    harness.api.set_response(json!("just a string")).await;

    let err = harness
        .orchestrator
        .execute("Investigate renewable energy markets.")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResearchError::Reshape(ReshapeError::NotAnObject { .. })
    ));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_wrong_field_type_is_reshape_error() {
    let harness = TestHarness::new();
    harness
        .api
        .set_response(json!({ "confidence_score": "very high" }))
        .await;

    let err = harness
        .orchestrator
        .execute("Investigate renewable energy markets.")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResearchError::Reshape(ReshapeError::Malformed(_))
    ));
}

#[tokio::test]
async fn test_concurrent_executions_are_independent() {
    let harness = TestHarness::new();
    let orchestrator = Arc::new(harness.orchestrator);

    let first = {
        let orchestrator = Arc::clone(&orchestrator);
        tokio::spawn(async move { orchestrator.execute("First research question").await })
    };
    let second = {
        let orchestrator = Arc::clone(&orchestrator);
        tokio::spawn(async move { orchestrator.execute("short").await })
    };

    assert!(first.await.unwrap().is_ok());
    assert!(second.await.unwrap().is_err());
    assert_eq!(
        harness.api.recorded_queries().await,
        vec!["First research question".to_string()]
    );
}

#[tokio::test]
async fn test_round_trip_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/research"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": "Test summary",
            "sources": ["Test Source"],
            "confidence_score": 0.99
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orchestrator =
        ResearchOrchestrator::from_settings(fixtures::settings(&format!("{}/v1", server.uri())))
            .unwrap();

    let result = orchestrator
        .execute("What are the latest advancements in AI?")
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "final_summary": "Test summary",
            "sources": ["Test Source"],
            "confidence": 0.99
        })
    );
}

#[tokio::test]
async fn test_unreachable_host_over_http() {
    let orchestrator =
        ResearchOrchestrator::from_settings(fixtures::settings("http://127.0.0.1:1/v1")).unwrap();

    let err = orchestrator
        .execute("A valid research query?")
        .await
        .unwrap_err();

    assert!(matches!(err, ResearchError::RemoteCall(_)));
}
