//! HTML viewer exporter
//!
//! Renders `templates/viewer.html`: a standalone page that fetches the JSON
//! artifact by relative path and draws it with Cytoscape. The only computed
//! parts are the per-type color tables and a few configured settings. Text
//! fields go through askama's HTML escaping; script values are encoded as JS
//! literals here and marked `|safe` in the template.

use crate::core::error::Result;
use crate::core::export::{ExportContext, Exporter};
use crate::core::models::TypeTable;
use askama::Template;
use serde_json::Value;
use std::fmt::Write;

/// Default CDN location of the Cytoscape bundle
pub const DEFAULT_LIBRARY_URL: &str = "https://unpkg.com/cytoscape/dist/cytoscape.min.js";

/// Background used when the configured one is not a hex color
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Settings for the generated viewer page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Page title
    pub title: String,
    /// Script URL of the visualization library
    pub library_url: String,
    /// Cytoscape layout name
    pub layout: String,
    /// Initial page background color (`#rgb` or `#rrggbb`)
    pub background_color: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: "Interactive Network Viewer".to_string(),
            library_url: DEFAULT_LIBRARY_URL.to_string(),
            layout: "cose".to_string(),
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "viewer.html")]
struct ViewerPage<'a> {
    title: &'a str,
    library_url: &'a str,
    background: &'a str,
    node_type_colors: String,
    edge_type_colors: String,
    data_file: String,
    layout: String,
}

/// Renders the interactive viewer page
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExporter;

impl HtmlExporter {
    /// Create a new HTML exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// One `"name": "color",` line per named type, in table order
    fn color_entries(table: &TypeTable) -> String {
        let mut lines = String::new();
        for (name, color) in table.named_colors() {
            let _ = writeln!(
                lines,
                "    {}: {},",
                js_string(&text_of(name)),
                js_string(&text_of(color))
            );
        }
        lines
    }
}

impl Exporter for HtmlExporter {
    fn render(&self, ctx: &ExportContext) -> Result<String> {
        let viewer = ctx.viewer;
        let page = ViewerPage {
            title: &viewer.title,
            library_url: &viewer.library_url,
            background: sanitize_color(&viewer.background_color).unwrap_or(DEFAULT_BACKGROUND),
            node_type_colors: Self::color_entries(&ctx.graph.node_types),
            edge_type_colors: Self::color_entries(&ctx.graph.edge_types),
            data_file: js_string(ctx.data_file),
            layout: js_string(&viewer.layout),
        };
        Ok(page.render()?)
    }
}

/// String form of a JSON value: strings as-is, anything else as JSON text
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Encode `s` as a JS string literal that is safe inside a `<script>` element
#[must_use]
pub fn js_string(s: &str) -> String {
    let quoted = Value::String(s.to_string()).to_string();
    let mut out = String::with_capacity(quoted.len());
    for ch in quoted.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c => out.push(c),
        }
    }
    out
}

/// Accept `#rgb` or `#rrggbb` hex colors, rejecting anything else
#[must_use]
pub fn sanitize_color(color: &str) -> Option<&str> {
    let hex = color.strip_prefix('#')?;
    let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    valid.then_some(color)
}
