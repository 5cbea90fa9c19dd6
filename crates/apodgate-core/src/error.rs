//! Shared error type across apodgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Startup configuration is missing or invalid.
    Config,
    /// The upstream imagery API could not produce a usable response.
    UpstreamUnavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Config => "CONFIG",
            ClientCode::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ApodGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum ApodGateError {
    #[error("config: {0}")]
    Config(String),
    #[error("missing required secret: environment variable {0} is not set")]
    MissingSecret(String),
    #[error("upstream request failed: {0}")]
    Upstream(String),
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),
    #[error("upstream returned a malformed body: {0}")]
    MalformedUpstream(String),
    #[error("metrics: {0}")]
    Metrics(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl ApodGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ApodGateError::Config(_) | ApodGateError::MissingSecret(_) => ClientCode::Config,
            ApodGateError::Upstream(_)
            | ApodGateError::UpstreamStatus(_)
            | ApodGateError::MalformedUpstream(_) => ClientCode::UpstreamUnavailable,
            ApodGateError::Metrics(_) | ApodGateError::Io(_) | ApodGateError::Internal(_) => {
                ClientCode::Internal
            }
        }
    }

    /// True for every failure originating at the upstream API.
    pub fn is_upstream(&self) -> bool {
        self.client_code() == ClientCode::UpstreamUnavailable
    }
}
