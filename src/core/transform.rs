//! Projection of a graph document into Cytoscape elements

use crate::core::models::{
    is_truthy, EdgeData, Element, ElementList, GraphDocument, NodeData, TypeTable,
    DEFAULT_EDGE_COLOR, DEFAULT_NODE_COLOR,
};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Output of [`transform`]: the two type tables and the element list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transformed {
    /// Node type id → name/color
    pub node_types: TypeTable,
    /// Edge type id → name/color
    pub edge_types: TypeTable,
    /// Cytoscape elements
    pub elements: ElementList,
}

/// Build type tables and project every node and edge, preserving order
#[must_use]
pub fn transform(doc: &GraphDocument) -> Transformed {
    let node_types = TypeTable::from_records(&doc.node_types, DEFAULT_NODE_COLOR);
    let edge_types = TypeTable::from_records(&doc.edge_types, DEFAULT_EDGE_COLOR);

    let nodes = doc
        .nodes
        .iter()
        .map(|node| {
            let label = node
                .name
                .as_ref()
                .filter(|name| is_truthy(name))
                .unwrap_or(&node.id)
                .clone();
            Element::new(NodeData {
                id: node.id.clone(),
                label,
                type_id: node.type_id.clone(),
                type_name: node_types.resolve_name(node.type_id.as_ref()),
            })
        })
        .collect();

    let edges = doc
        .edges
        .iter()
        .map(|edge| {
            Element::new(EdgeData {
                id: edge.id.clone(),
                source: edge.source_id.clone(),
                target: edge.target_id.clone(),
                type_id: edge.type_id.clone(),
                type_name: edge_types.resolve_name(edge.type_id.as_ref()),
            })
        })
        .collect();

    Transformed {
        node_types,
        edge_types,
        elements: ElementList { nodes, edges },
    }
}

/// Counts describing a transformation result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformSummary {
    /// Number of node elements
    pub nodes: usize,
    /// Number of edge elements
    pub edges: usize,
    /// Number of node types
    pub node_types: usize,
    /// Number of edge types
    pub edge_types: usize,
    /// Nodes whose type did not resolve to a name
    pub untyped_nodes: usize,
    /// Edges whose type did not resolve to a name
    pub untyped_edges: usize,
}

impl Transformed {
    /// Summarize the element list
    #[must_use]
    pub fn summary(&self) -> TransformSummary {
        TransformSummary {
            nodes: self.elements.nodes.len(),
            edges: self.elements.edges.len(),
            node_types: self.node_types.len(),
            edge_types: self.edge_types.len(),
            untyped_nodes: self
                .elements
                .nodes
                .iter()
                .filter(|n| n.data.type_name.is_none())
                .count(),
            untyped_edges: self
                .elements
                .edges
                .iter()
                .filter(|e| e.data.type_name.is_none())
                .count(),
        }
    }
}

impl fmt::Display for TransformSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes: {} ({} untyped)", self.nodes, self.untyped_nodes)?;
        writeln!(f, "Edges: {} ({} untyped)", self.edges, self.untyped_edges)?;
        writeln!(f, "Node Types: {}", self.node_types)?;
        write!(f, "Edge Types: {}", self.edge_types)
    }
}

/// Which end of an edge a dangling reference is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `sourceId`
    Source,
    /// `targetId`
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// An edge endpoint naming a node id that is not in the document
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingEndpoint {
    /// Id of the offending edge
    pub edge_id: Value,
    /// Which end dangles
    pub endpoint: Endpoint,
    /// The unknown node id
    pub node_id: Value,
}

impl fmt::Display for DanglingEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "edge {} {} {} is not a known node",
            self.edge_id, self.endpoint, self.node_id
        )
    }
}

/// List edge endpoints that reference unknown node ids, in edge order
///
/// The transformation itself never checks this; edges are passed through as-is.
#[must_use]
pub fn check_references(doc: &GraphDocument) -> Vec<DanglingEndpoint> {
    let known: HashSet<String> = doc.nodes.iter().map(|n| n.id.to_string()).collect();
    let mut dangling = Vec::new();

    for edge in &doc.edges {
        for (endpoint, node_id) in [
            (Endpoint::Source, &edge.source_id),
            (Endpoint::Target, &edge.target_id),
        ] {
            if !known.contains(&node_id.to_string()) {
                dangling.push(DanglingEndpoint {
                    edge_id: edge.id.clone(),
                    endpoint,
                    node_id: node_id.clone(),
                });
            }
        }
    }

    dangling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{EdgeRecord, NodeRecord, TypeRecord};
    use serde_json::json;

    fn doc(value: Value) -> GraphDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let out = transform(&doc(json!({
            "nodes": [{"id": "a"}, {"id": "b", "name": ""}, {"id": 3, "name": "Three"}]
        })));

        let labels: Vec<_> = out.elements.nodes.iter().map(|n| n.data.label.clone()).collect();
        assert_eq!(labels, vec![json!("a"), json!("b"), json!("Three")]);
    }

    #[test]
    fn test_node_without_id_gets_null_label() {
        let out = transform(&GraphDocument {
            nodes: vec![NodeRecord::default()],
            ..GraphDocument::default()
        });
        assert_eq!(out.elements.nodes[0].data.id, Value::Null);
        assert_eq!(out.elements.nodes[0].data.label, Value::Null);
    }

    #[test]
    fn test_edge_projection() {
        let out = transform(&GraphDocument {
            edge_types: vec![TypeRecord::named("w", "WORKS WITH")],
            edges: vec![EdgeRecord {
                id: json!("e1"),
                source_id: json!("a"),
                target_id: json!("z"),
                type_id: Some(json!("w")),
            }],
            ..GraphDocument::default()
        });

        let data = &out.elements.edges[0].data;
        assert_eq!(data.source, json!("a"));
        assert_eq!(data.target, json!("z"));
        assert_eq!(data.type_id, Some(json!("w")));
        assert_eq!(data.type_name, Some(json!("WORKS WITH")));
        assert_eq!(out.edge_types.get(&json!("w")).unwrap().color, json!("#bbb"));
    }

    #[test]
    fn test_node_and_edge_types_are_independent() {
        let out = transform(&doc(json!({
            "nodeTypes": [{"id": 1, "name": "Person"}],
            "nodes": [{"id": "a", "typeId": 1}, {"id": "b", "typeId": 1}],
            "edges": [{"id": "e", "sourceId": "a", "targetId": "b", "typeId": 1}]
        })));

        assert_eq!(out.elements.edges[0].data.type_name, None);
        assert_eq!(out.elements.edges[0].data.type_id, Some(json!(1)));
    }

    #[test]
    fn test_summary_counts() {
        let out = transform(&doc(json!({
            "nodeTypes": [{"id": 1, "name": "Person"}],
            "nodes": [{"id": "a", "typeId": 1}, {"id": "b", "typeId": 9}, {"id": "c"}],
            "edges": [{"id": "e", "sourceId": "a", "targetId": "b"}]
        })));

        let summary = out.summary();
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.edges, 1);
        assert_eq!(summary.node_types, 1);
        assert_eq!(summary.edge_types, 0);
        assert_eq!(summary.untyped_nodes, 2);
        assert_eq!(summary.untyped_edges, 1);
        assert!(summary.to_string().contains("Nodes: 3 (2 untyped)"));
    }

    #[test]
    fn test_check_references() {
        let graph = doc(json!({
            "nodes": [{"id": "a"}, {"id": 1}],
            "edges": [
                {"id": "ok", "sourceId": "a", "targetId": 1},
                {"id": "bad", "sourceId": "1", "targetId": "ghost"}
            ]
        }));

        let dangling = check_references(&graph);
        assert_eq!(dangling.len(), 2);
        assert_eq!(dangling[0].endpoint, Endpoint::Source);
        assert_eq!(dangling[0].node_id, json!("1"));
        assert_eq!(dangling[1].endpoint, Endpoint::Target);
        assert_eq!(
            dangling[1].to_string(),
            "edge \"bad\" target \"ghost\" is not a known node"
        );
    }

    #[test]
    fn test_dangling_edges_still_transform() {
        let graph = doc(json!({"edges": [{"id": "e", "sourceId": "x", "targetId": "y"}]}));
        let out = transform(&graph);
        assert_eq!(out.elements.edges.len(), 1);
        assert_eq!(check_references(&graph).len(), 2);
    }
}
