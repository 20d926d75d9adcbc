//! Prometheus metrics for the research pipeline.
//!
//! This module provides metrics for:
//! - Query outcomes (success and each failing stage)
//! - Research API call latency
//! - Reported result confidence

use once_cell::sync::Lazy;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Queries executed total by outcome.
pub static QUERIES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("cognita_queries_total", "Total research queries executed"),
        &["outcome"], // "success", "validation_error", "remote_error", "reshape_error"
    )
    .unwrap()
});

/// Research API call duration in seconds.
pub static REMOTE_CALL_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "cognita_remote_call_duration_seconds",
            "Duration of research API calls",
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["result"], // "success", "failed"
    )
    .unwrap()
});

/// Confidence reported for successful queries.
pub static RESULT_CONFIDENCE: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "cognita_result_confidence",
            "Distribution of reported result confidence",
        )
        .buckets(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95, 1.0]),
        &[],
    )
    .unwrap()
});

/// Get all pipeline metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(QUERIES_TOTAL.clone()),
        Box::new(REMOTE_CALL_DURATION.clone()),
        Box::new(RESULT_CONFIDENCE.clone()),
    ]
}

/// Build a registry holding all pipeline metrics.
pub fn registry() -> prometheus::Result<Registry> {
    let registry = Registry::new();
    for metric in all_metrics() {
        registry.register(metric)?;
    }
    Ok(registry)
}

/// Encode a registry in the Prometheus text exposition format.
pub fn encode(registry: &Registry) -> String {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
