//! Prometheus metrics for core components.
//!
//! This module provides metrics for the Artsy integration:
//! - xapp token exchanges
//! - upstream API calls (counts and latency per endpoint)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

/// Token exchanges by result.
pub static TOKEN_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "artscope_token_requests_total",
            "Total xapp token exchanges with the Artsy API",
        ),
        &["result"], // "issued", "cached", "rejected", "error"
    )
    .unwrap()
});

/// Upstream API requests by endpoint and result.
pub static UPSTREAM_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "artscope_upstream_requests_total",
            "Total requests sent to the Artsy API",
        ),
        &["endpoint", "result"], // result: "ok", "status", "transport", "parse"
    )
    .unwrap()
});

/// Upstream API request latency.
pub static UPSTREAM_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "artscope_upstream_request_duration_seconds",
            "Duration of requests sent to the Artsy API",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["endpoint"],
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(TOKEN_REQUESTS.clone()),
        Box::new(UPSTREAM_REQUESTS.clone()),
        Box::new(UPSTREAM_DURATION.clone()),
    ]
}
