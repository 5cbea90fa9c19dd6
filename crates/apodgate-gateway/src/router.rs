//! Axum router wiring.
//!
//! `/nasa` proxies the upstream API, `/metrics` exposes the registry. The
//! observation middleware wraps both routes and the fallback.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops, proxy};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/nasa", get(proxy::nasa))
        .route("/metrics", get(ops::metrics))
        .fallback(ops::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_requests,
        ))
        .with_state(state)
}
