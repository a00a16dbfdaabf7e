//! Library for `netgraph`
//! Loads typed graph documents, projects them into Cytoscape elements and
//! emits the JSON artifact plus the HTML viewer page.

pub mod core;
pub mod logger;

pub use crate::core::error::GraphError;
pub use crate::core::{config, error, export, get_version, loader, models, pipeline, transform};
