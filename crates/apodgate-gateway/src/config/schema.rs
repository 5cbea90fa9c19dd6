use std::net::SocketAddr;
use std::time::Duration;

use apodgate_core::error::{ApodGateError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub upstream: UpstreamSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            upstream: UpstreamSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ApodGateError::Config(format!(
                "unsupported config version {} (expected 1)",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.upstream.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            ApodGateError::Config(format!(
                "gateway.listen must be a valid socket address, got {:?}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the env var holding the access key. The key itself never lives in the file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Whole-request timeout. Unset by default: the upstream call then has no timeout of
    /// its own and fails only when the transport does.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_ms: None,
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApodGateError::Config(
                "upstream.base_url must start with http:// or https://".into(),
            ));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(ApodGateError::Config(
                "upstream.api_key_env must not be empty".into(),
            ));
        }
        if let Some(ms) = self.timeout_ms {
            if !(100..=300_000).contains(&ms) {
                return Err(ApodGateError::Config(
                    "upstream.timeout_ms must be between 100 and 300000".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_base_url() -> String {
    "https://api.nasa.gov/planetary/apod".into()
}
fn default_api_key_env() -> String {
    "NASA_API_KEY".into()
}
