//! Shared application state for the apodgate gateway.
//!
//! Holds the validated config, the metrics registry, and the upstream source.
//! Everything is injected here so tests can build isolated instances.

use std::sync::Arc;

use apodgate_core::error::Result;
use apodgate_core::ApiKey;

use crate::config::GatewayConfig;
use crate::obs::metrics::GatewayMetrics;
use crate::upstream::{ApodClient, ApodSource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    metrics: Arc<GatewayMetrics>,
    upstream: Arc<dyn ApodSource>,
}

impl AppState {
    /// Build state with a fresh registry and the real upstream client.
    pub fn new(cfg: GatewayConfig, api_key: ApiKey) -> Result<Self> {
        let metrics = Arc::new(GatewayMetrics::new()?);
        let upstream = Arc::new(ApodClient::from_config(&cfg.upstream, api_key)?);
        Ok(Self::from_parts(cfg, metrics, upstream))
    }

    pub fn from_parts(
        cfg: GatewayConfig,
        metrics: Arc<GatewayMetrics>,
        upstream: Arc<dyn ApodSource>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, metrics, upstream }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.inner.metrics)
    }

    pub fn upstream(&self) -> Arc<dyn ApodSource> {
        Arc::clone(&self.inner.upstream)
    }
}
