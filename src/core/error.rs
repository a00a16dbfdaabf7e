//! Error type shared by the loader, transformer and exporters

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, transforming or exporting a graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input document is not valid graph JSON
    #[error("invalid graph document {}: {source}", .path.display())]
    Parse {
        /// Input file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The element list could not be serialized
    #[error("failed to serialize elements: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The viewer template failed to render
    #[error("failed to render viewer template: {0}")]
    Template(#[from] askama::Error),

    /// Edges reference node ids that do not exist (strict mode only)
    #[error("{count} dangling edge endpoint(s), first: {first}")]
    DanglingEndpoints {
        /// Number of dangling endpoints
        count: usize,
        /// Description of the first one
        first: String,
    },

    /// Unrecognized export format name
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
}

impl GraphError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
