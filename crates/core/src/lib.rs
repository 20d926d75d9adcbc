pub mod client;
pub mod config;
pub mod metrics;
pub mod orchestrator;
pub mod query;
pub mod reshape;
pub mod testing;

pub use client::{DeepResearchClient, RawResponse, RemoteCallError, ResearchApi};
pub use config::{
    load_settings, load_settings_from, load_settings_from_str, validate_settings, ConfigError,
    SanitizedSettings, Settings,
};
pub use orchestrator::{ResearchError, ResearchOrchestrator};
pub use query::{validate_query, ValidatedQuery, ValidationError, MIN_QUERY_LENGTH};
pub use reshape::{
    format_response, summarize_results, FormattedResult, ReshapeError, SummarizedResult,
    NO_SUMMARY,
};
