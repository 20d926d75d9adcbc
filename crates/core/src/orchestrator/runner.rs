//! Research orchestrator implementation.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::client::{DeepResearchClient, ResearchApi};
use crate::config::{validate_settings, SanitizedSettings, Settings};
use crate::metrics;
use crate::query::validate_query;
use crate::reshape::{format_response, summarize_results, SummarizedResult};

use super::types::ResearchError;

/// The research orchestrator - the single entry point for running queries.
///
/// Holds only read-only state, so one instance can serve concurrent callers;
/// each `execute` call is an independent pipeline run.
pub struct ResearchOrchestrator {
    settings: Settings,
    api: Arc<dyn ResearchApi>,
}

impl ResearchOrchestrator {
    /// Create an orchestrator on top of any research backend.
    ///
    /// Fails with [`ResearchError::Config`] if `settings` do not pass
    /// [`validate_settings`].
    pub fn new(settings: Settings, api: Arc<dyn ResearchApi>) -> Result<Self, ResearchError> {
        validate_settings(&settings)?;

        info!(
            "Research orchestrator initialized with settings: {:?}",
            SanitizedSettings::from(&settings)
        );

        Ok(Self { settings, api })
    }

    /// Create an orchestrator backed by the HTTP [`DeepResearchClient`].
    pub fn from_settings(settings: Settings) -> Result<Self, ResearchError> {
        let client = DeepResearchClient::new(&settings)?;
        Self::new(settings, Arc::new(client))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Execute a research query and return the summarized results.
    ///
    /// Stops at the first failing stage and returns its error; there is no
    /// partial result and no retry.
    pub async fn execute(&self, query: &str) -> Result<SummarizedResult, ResearchError> {
        let query_id = Uuid::new_v4();

        async {
            let result = self.run_pipeline(query).await;
            self.record_outcome(&result);
            result
        }
        .instrument(info_span!("research_query", %query_id))
        .await
    }

    async fn run_pipeline(&self, query: &str) -> Result<SummarizedResult, ResearchError> {
        let validated = validate_query(query)?;
        debug!("Validated query: {}", validated);

        let raw_response = self.api.submit(&validated).await?;
        debug!("Raw response received: {}", raw_response);

        let formatted = format_response(&raw_response)?;
        debug!("Formatted response: {:?}", formatted);

        let summarized = summarize_results(formatted);
        debug!("Summarized results: {:?}", summarized);

        Ok(summarized)
    }

    fn record_outcome(&self, result: &Result<SummarizedResult, ResearchError>) {
        match result {
            Ok(summarized) => {
                info!("Results summarized successfully");
                metrics::QUERIES_TOTAL
                    .with_label_values(&["success"])
                    .inc();
                metrics::RESULT_CONFIDENCE
                    .with_label_values(&[])
                    .observe(summarized.confidence);

                if !summarized.meets_confidence(self.settings.min_confidence()) {
                    warn!(
                        "Result confidence {} is below the configured minimum {}",
                        summarized.confidence,
                        self.settings.min_confidence()
                    );
                }
            }
            Err(e) => {
                // Remote failures are reported at error level by the client.
                if let ResearchError::RemoteCall(_) = e {
                    debug!("Research query failed: {}", e);
                } else {
                    error!("Research query failed: {}", e);
                }
                metrics::QUERIES_TOTAL
                    .with_label_values(&[e.outcome()])
                    .inc();
            }
        }
    }
}
