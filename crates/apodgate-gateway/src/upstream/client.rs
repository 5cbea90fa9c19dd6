use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::value::RawValue;

use apodgate_core::error::{ApodGateError, Result};
use apodgate_core::ApiKey;

use super::{ApodSource, UpstreamPayload, DEFAULT_CONTENT_TYPE};
use crate::config::UpstreamSection;

/// Query parameter carrying the access key.
const API_KEY_PARAM: &str = "api_key";

pub struct ApodClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl ApodClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: ApiKey,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder
            .build()
            .map_err(|e| ApodGateError::Internal(format!("http client build failed: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn from_config(cfg: &UpstreamSection, api_key: ApiKey) -> Result<Self> {
        Self::new(cfg.base_url.clone(), api_key, cfg.timeout())
    }
}

impl std::fmt::Debug for ApodClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApodClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish()
    }
}

#[async_trait]
impl ApodSource for ApodClient {
    async fn fetch(&self) -> Result<UpstreamPayload> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[(API_KEY_PARAM, self.api_key.expose())])
            .send()
            .await
            .map_err(transport_err)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApodGateError::UpstreamStatus(status.as_u16()));
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        let body = resp.bytes().await.map_err(transport_err)?;

        // Relay the bytes untouched, but only if they are JSON.
        serde_json::from_slice::<&RawValue>(&body)
            .map_err(|e| ApodGateError::MalformedUpstream(e.to_string()))?;

        Ok(UpstreamPayload { content_type, body })
    }
}

// The request URL carries the key, so it is stripped from the error text.
fn transport_err(e: reqwest::Error) -> ApodGateError {
    let kind = if e.is_timeout() {
        "timeout"
    } else if e.is_connect() {
        "connect"
    } else if e.is_body() || e.is_decode() {
        "body"
    } else {
        "request"
    };
    ApodGateError::Upstream(format!("{kind}: {}", e.without_url()))
}
