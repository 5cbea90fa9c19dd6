//! Observability: the Prometheus registry and the per-request middleware.
//!
//! Every inbound request bumps `http_requests_total` and lands one observation
//! in `http_request_duration_seconds`. The registry is owned by `AppState`, so
//! each test builds its own isolated instance.

pub mod metrics;
pub mod middleware;
