//! apodgate core: error surface and secret handling shared by the gateway.
//!
//! This crate carries no transport or runtime dependencies so the error
//! contract can be reused by the binary, the library, and test tooling alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ApodGateError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod secret;

/// Shared result type.
pub use error::{ApodGateError, Result};
pub use secret::ApiKey;
