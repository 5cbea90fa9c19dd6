//! apodgate gateway library entry.
//!
//! Wires config, metrics, the upstream client, and the HTTP handlers into a
//! single axum router. Consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod proxy;
pub mod router;
pub mod upstream;
