//! Upstream imagery API access.
//!
//! `ApodSource` is the seam handlers depend on; `ApodClient` is the real
//! implementation backed by reqwest.

pub mod client;

use async_trait::async_trait;
use bytes::Bytes;

use apodgate_core::error::Result;

pub use client::ApodClient;

/// Content type assumed when the upstream omits one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// A successful upstream response, relayed verbatim to the caller.
#[derive(Debug, Clone)]
pub struct UpstreamPayload {
    pub content_type: String,
    pub body: Bytes,
}

impl UpstreamPayload {
    pub fn json(body: impl Into<Bytes>) -> Self {
        Self {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: body.into(),
        }
    }
}

/// Something that can produce the upstream payload.
#[async_trait]
pub trait ApodSource: Send + Sync + 'static {
    /// Issue exactly one upstream call. No retries.
    async fn fetch(&self) -> Result<UpstreamPayload>;
}
