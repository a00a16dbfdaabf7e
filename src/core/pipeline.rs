//! Load → transform → emit, as one call

use crate::core::error::{GraphError, Result};
use crate::core::export::{
    ExportContext, ExportFormat, Exporter, HtmlExporter, JsonExporter, ViewerOptions,
};
use crate::core::loader::load_graph;
use crate::core::transform::{check_references, transform, DanglingEndpoint, TransformSummary};
use crate::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name of the element JSON
pub const DEFAULT_JSON_FILE: &str = "my-graph-cyto.json";

/// Default file name of the viewer page
pub const DEFAULT_HTML_FILE: &str = "my-graph.html";

/// Inputs of one export run
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Graph document to read
    pub input: PathBuf,
    /// Directory receiving the artifacts (created if missing)
    pub out_dir: PathBuf,
    /// Path of the element JSON relative to `out_dir`, also fetched by the page
    pub json_file: String,
    /// Path of the viewer page relative to `out_dir`
    pub html_file: String,
    /// Which artifacts to write
    pub format: ExportFormat,
    /// Reject dangling edge endpoints instead of warning
    pub strict: bool,
    /// Viewer page settings
    pub viewer: ViewerOptions,
}

impl ExportRequest {
    /// Request with default file names, both artifacts, permissive references
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            out_dir: out_dir.into(),
            json_file: DEFAULT_JSON_FILE.to_string(),
            html_file: DEFAULT_HTML_FILE.to_string(),
            format: ExportFormat::All,
            strict: false,
            viewer: ViewerOptions::default(),
        }
    }
}

/// What an export run produced
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Path of the written JSON artifact
    pub json_path: Option<PathBuf>,
    /// Path of the written viewer page
    pub html_path: Option<PathBuf>,
    /// Element and type counts
    pub summary: TransformSummary,
    /// Edge endpoints naming unknown nodes (passed through unchanged)
    pub dangling: Vec<DanglingEndpoint>,
}

/// Run the whole pipeline for one request
///
/// # Errors
/// Fails when the input cannot be read or parsed, when an output cannot be
/// written, or in strict mode when an edge endpoint dangles.
pub fn export_graph(request: &ExportRequest) -> Result<ExportReport> {
    let document = load_graph(&request.input)?;
    info!("Graph loaded: {}", request.input.display());

    let dangling = check_references(&document);
    for endpoint in &dangling {
        warn!("{endpoint}");
    }
    if request.strict {
        if let Some(first) = dangling.first() {
            return Err(GraphError::DanglingEndpoints {
                count: dangling.len(),
                first: first.to_string(),
            });
        }
    }

    let graph = transform(&document);
    let summary = graph.summary();
    debug!(
        "Transformed {} nodes and {} edges",
        summary.nodes, summary.edges
    );

    create_dir(&request.out_dir)?;
    let ctx = ExportContext::new(&graph, &request.json_file, &request.viewer);

    let json_path = if request.format.includes_json() {
        let path = request.out_dir.join(&request.json_file);
        create_parent(&path)?;
        JsonExporter::new().generate(&ctx, &path)?;
        info!("Elements exported to: {}", path.display());
        Some(path)
    } else {
        None
    };

    let html_path = if request.format.includes_html() {
        let path = request.out_dir.join(&request.html_file);
        create_parent(&path)?;
        HtmlExporter::new().generate(&ctx, &path)?;
        info!("Viewer exported to: {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(ExportReport {
        json_path,
        html_path,
        summary,
        dangling,
    })
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| GraphError::io(dir, e))
}

/// Output names may be relative paths like `data/elements.json`
fn create_parent(path: &Path) -> Result<()> {
    path.parent().map_or(Ok(()), create_dir)
}
