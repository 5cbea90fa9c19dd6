//! Gateway config loader (strict parsing).

pub mod schema;

use std::env::VarError;
use std::fs;
use std::path::Path;

use apodgate_core::error::{ApodGateError, Result};

pub use schema::{GatewayConfig, GatewaySection, UpstreamSection};

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "APODGATE_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "apodgate.yaml";

/// Resolve config: `APODGATE_CONFIG`, then `./apodgate.yaml`, then built-in defaults.
pub fn load() -> Result<GatewayConfig> {
    load_from_sources(std::env::var(CONFIG_PATH_ENV), Path::new(DEFAULT_CONFIG_PATH))
}

/// Same resolution as `load`, with the env lookup and fallback path supplied by the caller.
///
/// Only an unset env var falls through; a set but unreadable value is a config error.
pub fn load_from_sources(
    env_path: std::result::Result<String, VarError>,
    default_path: &Path,
) -> Result<GatewayConfig> {
    match env_path {
        Ok(path) => load_from_file(&path),
        Err(VarError::NotUnicode(raw)) => Err(ApodGateError::Config(format!(
            "{CONFIG_PATH_ENV} is not valid unicode: {raw:?}"
        ))),
        Err(VarError::NotPresent) => match default_path.to_str() {
            Some(path) if default_path.exists() => load_from_file(path),
            _ => {
                let cfg = GatewayConfig::default();
                cfg.validate()?;
                Ok(cfg)
            }
        },
    }
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ApodGateError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| ApodGateError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
