//! Metrics for upstream API calls
//!
//! Uses the `metrics` facade; without an installed recorder every call
//! is a no-op.

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use std::time::Instant;

/// Metrics prefix for all TDP Search metrics
pub const METRICS_PREFIX: &str = "tdpsearch";

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        format!("{}_api_requests_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of requests sent to the search backend"
    );

    describe_histogram!(
        format!("{}_api_request_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Search backend request latency in seconds"
    );

    describe_counter!(
        format!("{}_loader_failures_total", METRICS_PREFIX),
        Unit::Count,
        "Page loads that degraded or failed"
    );

    tracing::info!("Metrics registered");
}

/// Tracks one request to the search backend
pub struct RequestMetrics {
    start: Instant,
    endpoint: String,
}

impl RequestMetrics {
    /// Start tracking a request
    pub fn start(endpoint: &str) -> Self {
        Self {
            start: Instant::now(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Record request completion. `status` is 0 when no response arrived.
    pub fn finish(self, status: u16) {
        let duration = self.start.elapsed().as_secs_f64();

        counter!(
            format!("{}_api_requests_total", METRICS_PREFIX),
            "endpoint" => self.endpoint.clone(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(
            format!("{}_api_request_duration_seconds", METRICS_PREFIX),
            "endpoint" => self.endpoint
        )
        .record(duration);
    }
}

/// Record a loader that fell back to empty data or an error page
pub fn record_loader_failure(loader: &str) {
    counter!(
        format!("{}_loader_failures_total", METRICS_PREFIX),
        "loader" => loader.to_string()
    )
    .increment(1);
}

/// Strip the query string so metric labels stay low-cardinality
pub fn endpoint_label(endpoint: &str) -> &str {
    let path = endpoint.split('?').next().unwrap_or(endpoint);
    if path.starts_with("/papers/") {
        "/papers/{id}"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_label() {
        assert_eq!(endpoint_label("/search?query=ball&search_type=hybrid"), "/search");
        assert_eq!(endpoint_label("/papers/soccer_smallsize__2019__RoboTeam__0"), "/papers/{id}");
        assert_eq!(endpoint_label("/papers"), "/papers");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        let m = RequestMetrics::start("/years");
        m.finish(200);
        record_loader_failure("layout");
    }
}
