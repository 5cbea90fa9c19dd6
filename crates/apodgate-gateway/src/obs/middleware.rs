//! Request observation middleware.
//!
//! Applied to every route and to the fallback. The counter is bumped before
//! the inner service runs, so a `/metrics` scrape already includes itself.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let metrics = state.metrics();
    metrics.record_request();
    let started = Instant::now();

    let method = req.method().as_str().to_owned();
    // Route template when matched, raw path otherwise.
    let route = match req.extensions().get::<MatchedPath>() {
        Some(p) => p.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };

    let resp = next.run(req).await;

    let status = resp.status().as_u16();
    let elapsed = started.elapsed();
    metrics.observe_request(&method, &route, status, elapsed);
    tracing::debug!(
        %method,
        %route,
        status,
        elapsed_ms = elapsed.as_millis() as u64,
        "request completed"
    );

    resp
}
