//! Access key wrapper.
//!
//! The key is read once at startup and only exposed when building the
//! outbound query string. Formatting never prints the value.

use std::fmt;

use crate::error::{ApodGateError, Result};

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ApodGateError::Config("api key must not be blank".into()));
        }
        Ok(Self(raw))
    }

    /// Read the key from `var`. Missing or blank values fail fast.
    pub fn from_env(var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(v) if !v.trim().is_empty() => Ok(Self(v)),
            _ => Err(ApodGateError::MissingSecret(var.to_string())),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
