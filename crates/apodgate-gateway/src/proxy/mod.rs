//! `/nasa` passthrough.
//!
//! One upstream call per request. Success relays the body and content type;
//! every failure collapses to the same plain-text 500 so no upstream detail
//! reaches the caller. The detail is logged server-side instead.

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::upstream::DEFAULT_CONTENT_TYPE;

pub const UPSTREAM_ERROR_BODY: &str = "Error fetching data from NASA API";

pub async fn nasa(State(state): State<AppState>) -> Response {
    match state.upstream().fetch().await {
        Ok(payload) => {
            let content_type = HeaderValue::from_str(&payload.content_type)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
            (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], payload.body).into_response()
        }
        Err(err) => {
            let code = err.client_code().as_str();
            tracing::warn!(error = %err, code, "upstream fetch failed");
            upstream_error()
        }
    }
}

fn upstream_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        UPSTREAM_ERROR_BODY,
    )
        .into_response()
}
