//! Data models for graph documents and Cytoscape elements

pub mod elements;
pub mod graph;
pub mod type_table;

pub use elements::{CytoscapeDocument, EdgeData, Element, ElementList, NodeData};
pub use graph::{is_truthy, EdgeRecord, GraphDocument, NodeRecord, TypeRecord};
pub use type_table::{TypeInfo, TypeTable, DEFAULT_EDGE_COLOR, DEFAULT_NODE_COLOR};
