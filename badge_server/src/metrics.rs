//! Prometheus metrics for badge service observability.

use metrics::counter;

/// Initialize metrics exporter (Prometheus).
pub fn init_metrics() {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    if let Err(e) = builder.install() {
        tracing::warn!("Failed to install Prometheus exporter: {}", e);
    }
}

/// Record a badge served with a resolved build status.
pub fn badge_served(status: &str) {
    counter!("badge_builds_served_total", "status" => status.to_string()).increment(1);
}

/// Record a badge request for a builder with no builds.
pub fn builder_not_found() {
    counter!("badge_builder_not_found_total").increment(1);
}

/// Record an upstream fetch failure.
pub fn upstream_fetch_failed() {
    counter!("badge_upstream_failures_total").increment(1);
}

/// Record a result code outside the documented range.
pub fn invalid_result_code() {
    counter!("badge_invalid_result_codes_total").increment(1);
}
