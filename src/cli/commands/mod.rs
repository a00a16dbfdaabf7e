//! CLI command handlers for `netgraph`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod export;
