//! HTTP client for the Deep Research API.
//!
//! One `POST {base_url}/research` per query, authenticated with a bearer
//! token. No retries: a failed call is reported once and returned.

use std::error::Error as StdError;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info};

use super::{RawResponse, RemoteCallError, ResearchApi};
use crate::config::Settings;
use crate::metrics;
use crate::query::ValidatedQuery;

/// Deep Research API client.
pub struct DeepResearchClient {
    client: Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
    parameters: ResearchParameters,
}

impl DeepResearchClient {
    /// Create a new client from settings.
    pub fn new(settings: &Settings) -> Result<Self, RemoteCallError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| RemoteCallError::Transport(describe(&e)))?;

        Ok(Self {
            client,
            endpoint: research_endpoint(settings.base_url()),
            api_key: settings.api_key().to_string(),
            timeout: settings.timeout(),
            parameters: ResearchParameters {
                max_results: settings.max_results(),
                min_confidence: settings.min_confidence(),
            },
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, query: &ValidatedQuery) -> Result<RawResponse, RemoteCallError> {
        let request = ResearchRequest {
            query: query.as_str(),
            parameters: &self.parameters,
        };

        debug!(
            "Research request: endpoint='{}', max_results={}, min_confidence={}",
            self.endpoint, self.parameters.max_results, self.parameters.min_confidence
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteCallError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        response.json::<RawResponse>().await.map_err(|e| {
            if e.is_timeout() {
                RemoteCallError::Timeout(self.timeout)
            } else {
                RemoteCallError::InvalidBody(describe(&e))
            }
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> RemoteCallError {
        if e.is_timeout() {
            RemoteCallError::Timeout(self.timeout)
        } else if e.is_connect() {
            RemoteCallError::Connection(describe(&e))
        } else {
            RemoteCallError::Transport(describe(&e))
        }
    }
}

#[async_trait]
impl ResearchApi for DeepResearchClient {
    async fn submit(&self, query: &ValidatedQuery) -> Result<RawResponse, RemoteCallError> {
        let started = Instant::now();
        let result = self.send(query).await;
        let elapsed = started.elapsed();

        match &result {
            Ok(_) => {
                info!(
                    "Research request completed in {:?} ({})",
                    elapsed, self.endpoint
                );
                metrics::REMOTE_CALL_DURATION
                    .with_label_values(&["success"])
                    .observe(elapsed.as_secs_f64());
            }
            Err(e) => {
                error!("API Request Failed: {}", e);
                metrics::REMOTE_CALL_DURATION
                    .with_label_values(&["failed"])
                    .observe(elapsed.as_secs_f64());
            }
        }

        result
    }
}

fn research_endpoint(base_url: &str) -> String {
    format!("{}/research", base_url.trim_end_matches('/'))
}

/// Render an error together with its source chain; reqwest keeps the useful
/// part (e.g. "Connection refused") in the sources.
fn describe(e: &(dyn StdError + 'static)) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

// ============================================================================
// Wire Types (private)
// ============================================================================

#[derive(Debug, Serialize)]
struct ResearchRequest<'a> {
    query: &'a str,
    parameters: &'a ResearchParameters,
}

#[derive(Debug, Clone, Serialize)]
struct ResearchParameters {
    max_results: u32,
    min_confidence: f64,
}
