//! JSON element exporter

use crate::core::error::Result;
use crate::core::export::{ExportContext, Exporter};
use crate::core::models::ElementList;
use serde::Serialize;

/// Borrowed `{"elements": ...}` wrapper so the list is serialized without cloning
#[derive(Serialize)]
struct ElementsDocument<'a> {
    elements: &'a ElementList,
}

/// Writes the element list as indented JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl JsonExporter {
    /// Create a new JSON exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Exporter for JsonExporter {
    fn render(&self, ctx: &ExportContext) -> Result<String> {
        let doc = ElementsDocument {
            elements: &ctx.graph.elements,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::ViewerOptions;
    use crate::core::transform::transform;
    use serde_json::{json, Value};

    fn render(input: Value) -> String {
        let graph = transform(&serde_json::from_value(input).unwrap());
        let viewer = ViewerOptions::default();
        let ctx = ExportContext::new(&graph, "graph.json", &viewer);
        JsonExporter::new().render(&ctx).unwrap()
    }

    #[test]
    fn test_empty_document() {
        let out: Value = serde_json::from_str(&render(json!({}))).unwrap();
        assert_eq!(out, json!({"elements": {"nodes": [], "edges": []}}));
    }

    #[test]
    fn test_key_order_and_indent() {
        let text = render(json!({
            "nodes": [{"id": "a", "typeId": 4}],
            "edges": [{"id": "e", "sourceId": "a", "targetId": "a"}]
        }));

        let id = text.find("\"id\": \"a\"").unwrap();
        let label = text.find("\"label\"").unwrap();
        let type_id = text.find("\"typeId\": 4").unwrap();
        let type_name = text.find("\"type\": null").unwrap();
        assert!(id < label && label < type_id && type_id < type_name);

        assert!(text.starts_with("{\n  \"elements\": {\n    \"nodes\": ["));
        assert!(text.contains("\"source\": \"a\",\n"));
    }
}
