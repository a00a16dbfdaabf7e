//! Core pipeline: configuration, input loading, transformation and export

pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod transform;

/// Returns the current version of the `netgraph` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
