//! Research orchestrator.
//!
//! Runs one query through the pipeline, in order:
//! - **Validate**: trim and length-check the raw query
//! - **Submit**: single call to the research API
//! - **Format**: raw JSON to `FormattedResult`
//! - **Summarize**: `FormattedResult` to `SummarizedResult`

mod runner;
mod types;

pub use runner::ResearchOrchestrator;
pub use types::ResearchError;
