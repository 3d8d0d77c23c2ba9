//! Prometheus metrics for fruit mutations and request latency.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Fruits created counter metric name.
pub const METRIC_FRUITS_CREATED: &str = "fruits_created_total";
/// Fruits updated counter metric name.
pub const METRIC_FRUITS_UPDATED: &str = "fruits_updated_total";
/// Fruits destroyed counter metric name.
pub const METRIC_FRUITS_DESTROYED: &str = "fruits_destroyed_total";

/// Install the Prometheus recorder and register metric descriptions.
/// Call this once at startup; the handle renders the `/metrics` page.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_FRUITS_CREATED, "Total number of fruits created");
    describe_counter!(METRIC_FRUITS_UPDATED, "Total number of fruits updated");
    describe_counter!(METRIC_FRUITS_DESTROYED, "Total number of fruits destroyed");

    debug!("Metrics initialized");
    Ok(handle)
}

/// Increment fruits created counter.
pub fn inc_fruits_created() {
    counter!(METRIC_FRUITS_CREATED).increment(1);
}

/// Increment fruits updated counter.
pub fn inc_fruits_updated() {
    counter!(METRIC_FRUITS_UPDATED).increment(1);
}

/// Increment fruits destroyed counter.
pub fn inc_fruits_destroyed() {
    counter!(METRIC_FRUITS_DESTROYED).increment(1);
}

/// RAII guard for timing a request.
/// Records latency under the route label when dropped.
pub struct LatencyTimer {
    start: Instant,
    route: &'static str,
}

impl LatencyTimer {
    /// Start timing a request for the given route.
    pub fn new(route: &'static str) -> Self {
        Self {
            start: Instant::now(),
            route,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        let latency_ms = self.elapsed_ms();
        histogram!(METRIC_HTTP_REQUEST_LATENCY, "route" => self.route).record(latency_ms);
    }
}

/// Create a latency timer labelled with the handler name (`index`, `show`, ...).
pub fn timer_http(route: &'static str) -> LatencyTimer {
    LatencyTimer::new(route)
}
