//! Result records produced by the reshaping stages.

use serde::{Deserialize, Serialize};

/// Summary used when the API returned none.
pub const NO_SUMMARY: &str = "No summary available";

/// Research results in a standard shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormattedResult {
    /// Summary text (empty when the API sent none).
    pub summary: String,
    /// Source references, in API order.
    pub sources: Vec<String>,
    /// Self-reported confidence of the API (0.0 when absent).
    pub confidence: f64,
}

/// Final, caller-facing research results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizedResult {
    pub final_summary: String,
    pub sources: Vec<String>,
    pub confidence: f64,
}

impl SummarizedResult {
    /// Whether the reported confidence reaches `threshold`.
    pub fn meets_confidence(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }
}
