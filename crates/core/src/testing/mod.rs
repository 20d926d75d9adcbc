//! Testing utilities and mock implementations.
//!
//! This module provides a mock of the research API trait, allowing the
//! pipeline to be tested without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use cognita_core::testing::{fixtures, MockResearchApi};
//!
//! let api = MockResearchApi::new();
//! api.set_response(fixtures::research_response("Test summary", &["Test Source"], 0.99)).await;
//!
//! // Hand it to a ResearchOrchestrator...
//! ```

mod mock_research_api;

pub use mock_research_api::MockResearchApi;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::client::RawResponse;
    use crate::config::Settings;

    /// Settings pointing at `base_url` with small limits.
    pub fn settings(base_url: &str) -> Settings {
        // The key is a non-empty literal, so construction cannot fail.
        Settings::new("dummykey")
            .map(|s| {
                s.with_base_url(base_url)
                    .with_timeout_secs(10)
                    .with_max_results(5)
                    .with_min_confidence(0.8)
            })
            .unwrap_or_else(|e| panic!("fixture settings: {e}"))
    }

    /// A research API response body with all three known fields.
    pub fn research_response(summary: &str, sources: &[&str], confidence: f64) -> RawResponse {
        serde_json::json!({
            "summary": summary,
            "sources": sources,
            "confidence_score": confidence,
        })
    }
}
