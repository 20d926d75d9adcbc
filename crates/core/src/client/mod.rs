//! Deep Research API client.
//!
//! The [`ResearchApi`] trait is the seam between the pipeline and the network:
//! [`DeepResearchClient`] talks HTTP, `testing::MockResearchApi` stands in for
//! it in tests.

mod deep_research;

pub use deep_research::DeepResearchClient;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::query::ValidatedQuery;

/// Untyped JSON body returned by the research endpoint.
///
/// No shape is enforced at this layer; see [`crate::reshape::format_response`].
pub type RawResponse = serde_json::Value;

/// Errors that can occur when calling the research API.
///
/// All of them are safe to retry with the identical request; the client
/// itself never does.
#[derive(Debug, Error)]
pub enum RemoteCallError {
    /// Could not connect to the API host.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// No response within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Any other transport failure (TLS, redirect loop, client build).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// API answered with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// API answered 2xx but the body is not JSON.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// Submits validated queries to a research backend.
#[async_trait]
pub trait ResearchApi: Send + Sync {
    /// Send one research request and return the parsed body verbatim.
    async fn submit(&self, query: &ValidatedQuery) -> Result<RawResponse, RemoteCallError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RemoteCallError::Status {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - maintenance");

        let err = RemoteCallError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "Request timed out after 10s");

        let err = RemoteCallError::Connection("Simulated network error".to_string());
        assert!(err.to_string().contains("Simulated network error"));
    }
}
