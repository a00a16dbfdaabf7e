//! Type lookup tables built from `nodeTypes` / `edgeTypes`

use super::graph::{is_truthy, TypeRecord};
use indexmap::IndexMap;
use serde_json::Value;

/// Color used for node types without a usable color
pub const DEFAULT_NODE_COLOR: &str = "#888";

/// Color used for edge types without a usable color
pub const DEFAULT_EDGE_COLOR: &str = "#bbb";

/// Integers up to 2^53 survive a round trip through `f64`
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Resolved metadata for one type id
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    /// Type name, `None` when the record has none
    pub name: Option<Value>,
    /// Display color (defaulted when the record's color is falsy)
    pub color: Value,
}

/// Insertion-ordered mapping from type id to [`TypeInfo`]
///
/// Ids are keyed by their JSON text, so `1` and `"1"` are different types.
/// Integral floats key like the matching integer (`1.0` finds type `1`).
/// A repeated id replaces the earlier entry but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeTable {
    entries: IndexMap<String, TypeInfo>,
}

impl TypeTable {
    /// Build a table from type records, substituting `default_color` for falsy colors
    #[must_use]
    pub fn from_records(records: &[TypeRecord], default_color: &str) -> Self {
        let mut entries = IndexMap::with_capacity(records.len());
        for record in records {
            let color = record
                .color
                .as_ref()
                .filter(|c| is_truthy(c))
                .cloned()
                .unwrap_or_else(|| Value::String(default_color.to_string()));
            entries.insert(
                Self::key(&record.id),
                TypeInfo {
                    name: record.name.clone(),
                    color,
                },
            );
        }
        Self { entries }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn key(id: &Value) -> String {
        match id {
            Value::Number(n) if !(n.is_i64() || n.is_u64()) => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < MAX_EXACT_FLOAT)
                .map_or_else(|| n.to_string(), |f| (f as i64).to_string()),
            other => other.to_string(),
        }
    }

    /// Look up a type id
    #[must_use]
    pub fn get(&self, id: &Value) -> Option<&TypeInfo> {
        self.entries.get(&Self::key(id))
    }

    /// Resolve an optional type id to its name. Missing or unknown ids give `None`.
    #[must_use]
    pub fn resolve_name(&self, id: Option<&Value>) -> Option<Value> {
        id.and_then(|id| self.get(id))
            .and_then(|info| info.name.clone())
    }

    /// `(name, color)` pairs for every entry with a truthy name, in table order
    pub fn named_colors(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.values().filter_map(|info| {
            info.name
                .as_ref()
                .filter(|name| is_truthy(name))
                .map(|name| (name, &info.color))
        })
    }

    /// Number of distinct type ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
