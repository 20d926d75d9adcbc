//! Types for the research orchestrator.

use thiserror::Error;

use crate::client::RemoteCallError;
use crate::config::ConfigError;
use crate::query::ValidationError;
use crate::reshape::ReshapeError;

/// Errors that can occur while executing a research query.
///
/// Each variant names the pipeline stage that failed; the stage's own error
/// is kept unchanged inside.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// The query was rejected before any network call.
    #[error("invalid query: {0}")]
    Validation(#[from] ValidationError),

    /// The research API could not be reached or answered with an error.
    #[error("remote call failed: {0}")]
    RemoteCall(#[from] RemoteCallError),

    /// The API response could not be interpreted.
    #[error("unexpected response: {0}")]
    Reshape(#[from] ReshapeError),

    /// The orchestrator was given settings that break their invariants.
    #[error("invalid settings: {0}")]
    Config(#[from] ConfigError),
}

impl ResearchError {
    /// Whether repeating the identical request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ResearchError::RemoteCall(_))
    }

    /// Short label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            ResearchError::Validation(_) => "validation_error",
            ResearchError::RemoteCall(_) => "remote_error",
            ResearchError::Reshape(_) => "reshape_error",
            ResearchError::Config(_) => "config_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_remote_errors_are_retryable() {
        let validation: ResearchError = ValidationError::TooShort { length: 5, min: 10 }.into();
        let remote: ResearchError = RemoteCallError::Connection("refused".to_string()).into();
        let reshape: ResearchError = ReshapeError::NotAnObject { found: "an array" }.into();

        assert!(!validation.is_retryable());
        assert!(remote.is_retryable());
        assert!(!reshape.is_retryable());
    }

    #[test]
    fn test_outcome_labels() {
        let validation: ResearchError = ValidationError::TooShort { length: 0, min: 10 }.into();
        assert_eq!(validation.outcome(), "validation_error");

        let remote: ResearchError = RemoteCallError::Status {
            status: 500,
            message: String::new(),
        }
        .into();
        assert_eq!(remote.outcome(), "remote_error");

        let config: ResearchError = ConfigError::MissingApiKey.into();
        assert_eq!(config.outcome(), "config_error");
        assert!(!config.is_retryable());
    }

    #[test]
    fn test_display_includes_stage_error() {
        let err: ResearchError = ValidationError::TooShort { length: 5, min: 10 }.into();
        assert_eq!(
            err.to_string(),
            "invalid query: Query too short: 5 characters (min 10)"
        );
    }
}
