//! apodgate gateway
//!
//! - `GET /nasa`    : passthrough to the planetary imagery API
//! - `GET /metrics` : Prometheus scrape endpoint
//!
//! The access key is read from the env var named by `upstream.api_key_env`
//! (default `NASA_API_KEY`); startup fails if it is missing.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use apodgate_core::error::Result;
use apodgate_core::ApiKey;
use apodgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.client_code().as_str();
            tracing::error!(error = %err, code, "apodgate-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.gateway.listen_addr()?;
    let api_key = ApiKey::from_env(&cfg.upstream.api_key_env)?;

    let state = app_state::AppState::new(cfg, api_key)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Server is running on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
