//! Cytoscape element model written to the JSON artifact

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Cytoscape element: a `data` record wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element<T> {
    /// Element payload
    pub data: T,
}

impl<T> Element<T> {
    /// Wrap a data record
    pub const fn new(data: T) -> Self {
        Self { data }
    }
}

/// Display data for a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Original node id
    pub id: Value,
    /// Node name, or the id when the name is unset
    pub label: Value,
    /// Original type id, `null` when absent
    pub type_id: Option<Value>,
    /// Resolved type name, `null` when the id is absent or unknown
    #[serde(rename = "type")]
    pub type_name: Option<Value>,
}

/// Display data for an edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    /// Original edge id
    pub id: Value,
    /// Source node id, copied from `sourceId`
    pub source: Value,
    /// Target node id, copied from `targetId`
    pub target: Value,
    /// Original type id, `null` when absent
    pub type_id: Option<Value>,
    /// Resolved type name, `null` when the id is absent or unknown
    #[serde(rename = "type")]
    pub type_name: Option<Value>,
}

/// Ordered node and edge elements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementList {
    /// Node elements in input order
    pub nodes: Vec<Element<NodeData>>,
    /// Edge elements in input order
    pub edges: Vec<Element<EdgeData>>,
}

/// The JSON artifact: `{"elements": {"nodes": [...], "edges": [...]}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CytoscapeDocument {
    /// Element list
    pub elements: ElementList,
}

impl From<ElementList> for CytoscapeDocument {
    fn from(elements: ElementList) -> Self {
        Self { elements }
    }
}
