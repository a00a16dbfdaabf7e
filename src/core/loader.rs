//! Graph document loader

use crate::core::error::{GraphError, Result};
use crate::core::models::GraphDocument;
use std::fs;
use std::path::Path;

/// Read and parse a graph document from a JSON file
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be read and
/// [`GraphError::Parse`] if it is not a valid graph document.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<GraphDocument> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
    parse_graph(&content).map_err(|source| GraphError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a graph document from JSON text
///
/// # Errors
/// Returns the underlying JSON error when the text is malformed or a
/// collection has the wrong shape.
pub fn parse_graph(content: &str) -> serde_json::Result<GraphDocument> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_graph_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nodeTypes":[{{"id":1,"name":"Person"}}],"nodes":[{{"id":"a"}}]}}"#
        )
        .unwrap();

        let doc = load_graph(file.path()).unwrap();
        assert_eq!(doc.node_types.len(), 1);
        assert_eq!(doc.nodes.len(), 1);
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_graph("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GraphError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_graph(file.path()).unwrap_err();
        assert!(matches!(err, GraphError::Parse { .. }));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        assert!(parse_graph(r#"{"nodes": {"id": "a"}}"#).is_err());
        assert!(parse_graph("[]").is_err());
    }
}
