//! Artifact exporters
//!
//! Writes the Cytoscape element list as JSON and renders the HTML viewer page
//! that loads it.

pub mod html;
pub mod json;

pub use html::{HtmlExporter, ViewerOptions};
pub use json::JsonExporter;

use crate::core::error::{GraphError, Result};
use crate::core::transform::Transformed;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Which artifacts to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Only the element JSON
    Json,
    /// Only the viewer page
    Html,
    /// Both artifacts
    #[default]
    All,
}

impl ExportFormat {
    /// Whether the JSON artifact is written
    #[must_use]
    pub const fn includes_json(self) -> bool {
        matches!(self, Self::Json | Self::All)
    }

    /// Whether the HTML artifact is written
    #[must_use]
    pub const fn includes_html(self) -> bool {
        matches!(self, Self::Html | Self::All)
    }
}

impl FromStr for ExportFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "html" | "htm" => Ok(Self::Html),
            "all" | "both" => Ok(Self::All),
            _ => Err(GraphError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Html => write!(f, "html"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Everything an exporter needs to render one artifact
#[derive(Debug, Clone, Copy)]
pub struct ExportContext<'a> {
    /// Type tables and element list
    pub graph: &'a Transformed,
    /// Path of the JSON artifact relative to the HTML page
    pub data_file: &'a str,
    /// Viewer page settings
    pub viewer: &'a ViewerOptions,
}

impl<'a> ExportContext<'a> {
    /// Create a new export context
    #[must_use]
    pub const fn new(graph: &'a Transformed, data_file: &'a str, viewer: &'a ViewerOptions) -> Self {
        Self {
            graph,
            data_file,
            viewer,
        }
    }
}

/// Trait for artifact exporters
pub trait Exporter {
    /// Render the artifact as a string
    ///
    /// # Errors
    /// Returns an error if serialization or template rendering fails
    fn render(&self, ctx: &ExportContext) -> Result<String>;

    /// Render the artifact and write it to `output_path`, replacing any existing file
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn generate(&self, ctx: &ExportContext, output_path: &Path) -> Result<()> {
        let content = self.render(ctx)?;
        fs::write(output_path, content).map_err(|e| GraphError::io(output_path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("htm".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("both".parse::<ExportFormat>().unwrap(), ExportFormat::All);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(GraphError::UnknownFormat(name)) if name == "pdf"
        ));
    }

    #[test]
    fn test_format_selection() {
        assert!(ExportFormat::All.includes_json() && ExportFormat::All.includes_html());
        assert!(!ExportFormat::Json.includes_html());
        assert!(!ExportFormat::Html.includes_json());
        assert_eq!(ExportFormat::default().to_string(), "all");
    }
}
