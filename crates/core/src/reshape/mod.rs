//! Reshaping of raw API responses into fixed-field result records.
//!
//! Untyped JSON enters the typed pipeline only through [`format_response`].
//! A response that is not a JSON object is always rejected; missing (or
//! `null`) keys inside an object fall back to defaults.

mod types;

pub use types::*;

use serde::Deserialize;
use thiserror::Error;

use crate::client::RawResponse;

/// Errors raised when a response cannot be interpreted.
#[derive(Debug, Error)]
pub enum ReshapeError {
    /// The body is not key-addressable at all.
    #[error("Invalid response format: expected a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    /// A known key holds a value of the wrong type.
    #[error("Invalid response format: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Fields read from the research response. Everything is optional here;
/// defaults are applied when converting to [`FormattedResult`].
#[derive(Debug, Deserialize)]
struct ResponseFields {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    sources: Option<Vec<String>>,
    #[serde(default)]
    confidence_score: Option<f64>,
}

impl From<ResponseFields> for FormattedResult {
    fn from(fields: ResponseFields) -> Self {
        Self {
            summary: fields.summary.unwrap_or_default(),
            sources: fields.sources.unwrap_or_default(),
            confidence: fields.confidence_score.unwrap_or(0.0),
        }
    }
}

/// Standardize an API response into a [`FormattedResult`].
///
/// `confidence_score` is renamed to `confidence`; unknown keys are ignored.
pub fn format_response(raw: &RawResponse) -> Result<FormattedResult, ReshapeError> {
    if !raw.is_object() {
        return Err(ReshapeError::NotAnObject {
            found: json_kind(raw),
        });
    }

    let fields = ResponseFields::deserialize(raw).map_err(ReshapeError::Malformed)?;
    Ok(fields.into())
}

/// Wrap formatted results into the final caller-facing record.
pub fn summarize_results(formatted: FormattedResult) -> SummarizedResult {
    let final_summary = if formatted.summary.is_empty() {
        NO_SUMMARY.to_string()
    } else {
        formatted.summary
    };

    SummarizedResult {
        final_summary,
        sources: formatted.sources,
        confidence: formatted.confidence,
    }
}

fn json_kind(value: &RawResponse) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
