//! Input graph document model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Returns whether a JSON value counts as "set".
///
/// `null`, `false`, `0`, `""`, `[]` and `{}` are falsy; everything else is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Metadata shared by every node or edge of one type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    /// Type identifier (number or string)
    pub id: Value,

    /// Human-readable type name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    /// Display color, e.g. `#f00`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
}

impl TypeRecord {
    /// Create a type record with a name and no color
    #[must_use]
    pub fn named(id: impl Into<Value>, name: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            color: None,
        }
    }

    /// Set the display color
    #[must_use]
    pub fn with_color(mut self, color: impl Into<Value>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A node as it appears in the input document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    /// Node identifier
    #[serde(default)]
    pub id: Value,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    /// Node type identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<Value>,
}

/// An edge as it appears in the input document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    /// Edge identifier
    #[serde(default)]
    pub id: Value,

    /// Identifier of the source node
    #[serde(default)]
    pub source_id: Value,

    /// Identifier of the target node
    #[serde(default)]
    pub target_id: Value,

    /// Edge type identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<Value>,
}

/// Top-level input document. Every collection is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    /// Node type metadata
    #[serde(default)]
    pub node_types: Vec<TypeRecord>,

    /// Edge type metadata
    #[serde(default)]
    pub edge_types: Vec<TypeRecord>,

    /// Nodes in document order
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,

    /// Edges in document order
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(7)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([0])));
    }

    #[test]
    fn test_empty_document_parses() {
        let doc: GraphDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, GraphDocument::default());
    }

    #[test]
    fn test_camel_case_fields() {
        let doc: GraphDocument = serde_json::from_value(json!({
            "nodes": [{"id": "a", "typeId": 2}],
            "edges": [{"id": "e", "sourceId": "a", "targetId": "b"}],
            "extra": true
        }))
        .unwrap();

        assert_eq!(doc.nodes[0].type_id, Some(json!(2)));
        assert_eq!(doc.nodes[0].name, None);
        assert_eq!(doc.edges[0].source_id, json!("a"));
        assert_eq!(doc.edges[0].target_id, json!("b"));
        assert_eq!(doc.edges[0].type_id, None);
    }

    #[test]
    fn test_type_record_requires_id() {
        let result: Result<TypeRecord, _> = serde_json::from_value(json!({"name": "Person"}));
        assert!(result.is_err());
    }
}
