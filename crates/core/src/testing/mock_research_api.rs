//! Mock research API for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::client::{RawResponse, RemoteCallError, ResearchApi};
use crate::query::ValidatedQuery;

/// Mock implementation of the ResearchApi trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable raw response (an empty object by default)
/// - Track submitted queries for assertions
/// - Simulate failures
///
/// # Example
///
/// ```rust,ignore
/// use cognita_core::testing::{MockResearchApi, fixtures};
///
/// let api = MockResearchApi::new();
/// api.set_response(fixtures::research_response("Test summary", &["Test Source"], 0.99)).await;
///
/// let orchestrator = ResearchOrchestrator::new(settings, Arc::new(api))?;
/// ```
#[derive(Debug, Clone)]
pub struct MockResearchApi {
    /// Response returned for every successful submit.
    response: Arc<RwLock<RawResponse>>,
    /// Submitted queries, in order.
    queries: Arc<RwLock<Vec<String>>>,
    /// If set, the next submit will fail with this error.
    next_error: Arc<RwLock<Option<RemoteCallError>>>,
}

impl Default for MockResearchApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResearchApi {
    /// Create a mock answering every query with `{}`.
    pub fn new() -> Self {
        Self {
            response: Arc::new(RwLock::new(RawResponse::Object(Default::default()))),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the raw response returned from now on.
    pub async fn set_response(&self, response: RawResponse) {
        *self.response.write().await = response;
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all submitted queries.
    pub async fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    /// Get the number of submits performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    /// Clear recorded queries.
    pub async fn clear_recorded(&self) {
        self.queries.write().await.clear();
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next submit to fail with the given error.
    pub async fn set_next_error(&self, error: RemoteCallError) {
        *self.next_error.write().await = Some(error);
    }

    /// Clear any pending error.
    pub async fn clear_next_error(&self) {
        *self.next_error.write().await = None;
    }
}

#[async_trait]
impl ResearchApi for MockResearchApi {
    async fn submit(&self, query: &ValidatedQuery) -> Result<RawResponse, RemoteCallError> {
        self.queries.write().await.push(query.as_str().to_string());

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        Ok(self.response.read().await.clone())
    }
}
