//! Metrics registry for the gateway.
//!
//! Wraps a private `prometheus::Registry` holding the process collector, the
//! request counter, and the labeled duration histogram. Rendering goes through
//! the text encoder so the output and content type always agree.

use std::time::Duration;

use prometheus::core::Collector;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounter, Registry, TextEncoder};

use apodgate_core::error::{ApodGateError, Result};

pub const REQUESTS_TOTAL: &str = "http_requests_total";
pub const REQUEST_DURATION: &str = "http_request_duration_seconds";

/// Label order for `http_request_duration_seconds`.
pub const DURATION_LABELS: [&str; 3] = ["method", "route", "status_code"];

/// Histogram bucket boundaries in seconds.
pub const DURATION_BUCKETS: [f64; 6] = [0.1, 0.5, 1.0, 1.5, 2.0, 5.0];

pub struct GatewayMetrics {
    registry: Registry,
    requests_total: IntCounter,
    request_duration: HistogramVec,
}

impl GatewayMetrics {
    /// Build a fresh registry with default runtime metrics and the HTTP collectors.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        register_runtime_metrics(&registry)?;

        let requests_total = IntCounter::new(REQUESTS_TOTAL, "Total number of HTTP requests")
            .map_err(metrics_err)?;
        register(&registry, requests_total.clone())?;

        let request_duration = HistogramVec::new(
            HistogramOpts::new(REQUEST_DURATION, "Duration of HTTP requests in seconds")
                .buckets(DURATION_BUCKETS.to_vec()),
            &DURATION_LABELS,
        )
        .map_err(metrics_err)?;
        register(&registry, request_duration.clone())?;

        Ok(Self {
            registry,
            requests_total,
            request_duration,
        })
    }

    /// Count one inbound request.
    pub fn record_request(&self) {
        self.requests_total.inc();
    }

    /// Record one completed request.
    pub fn observe_request(&self, method: &str, route: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.request_duration
            .with_label_values(&[method, route, status.as_str()])
            .observe(elapsed.as_secs_f64());
    }

    pub fn requests_total(&self) -> u64 {
        self.requests_total.get()
    }

    /// Number of observations recorded for one label set. Creates the series at zero if absent.
    pub fn duration_count(&self, method: &str, route: &str, status: u16) -> u64 {
        let status = status.to_string();
        self.request_duration
            .get_metric_with_label_values(&[method, route, status.as_str()])
            .map(|h| h.get_sample_count())
            .unwrap_or(0)
    }

    /// Media type of the exposition format produced by `render`.
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Serialize every registered metric in Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buf = Vec::new();
        encoder
            .encode(&self.registry.gather(), &mut buf)
            .map_err(metrics_err)?;
        String::from_utf8(buf).map_err(|e| ApodGateError::Metrics(e.to_string()))
    }
}

fn register<C>(registry: &Registry, collector: C) -> Result<()>
where
    C: Collector + 'static,
{
    registry.register(Box::new(collector)).map_err(metrics_err)
}

#[cfg(target_os = "linux")]
fn register_runtime_metrics(registry: &Registry) -> Result<()> {
    register(
        registry,
        prometheus::process_collector::ProcessCollector::for_self(),
    )
}

#[cfg(not(target_os = "linux"))]
fn register_runtime_metrics(_registry: &Registry) -> Result<()> {
    tracing::debug!("process collector unavailable on this platform");
    Ok(())
}

fn metrics_err(e: prometheus::Error) -> ApodGateError {
    ApodGateError::Metrics(e.to_string())
}
