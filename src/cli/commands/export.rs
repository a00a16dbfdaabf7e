//! Export command handler
//!
//! Converts a graph document into the Cytoscape element JSON and the
//! interactive viewer page.

use netgraph::config::Config;
use netgraph::export::ExportFormat;
use netgraph::pipeline::{
    export_graph, ExportReport, ExportRequest, DEFAULT_HTML_FILE, DEFAULT_JSON_FILE,
};
use netgraph::{error, verbose};
use std::path::PathBuf;
use std::str::FromStr;

/// Export options taken from the command line
#[derive(Debug, Default)]
pub struct ExportArgs {
    /// Override for the JSON file name
    pub json_name: Option<String>,
    /// Override for the HTML file name
    pub html_name: Option<String>,
    /// Requested artifacts (`json`, `html`, `all`)
    pub format: String,
    /// Reject dangling edge endpoints
    pub strict: bool,
}

fn pick(cli: Option<&String>, configured: &str, fallback: &str) -> String {
    cli.map_or_else(
        || {
            if configured.is_empty() {
                fallback.to_string()
            } else {
                configured.to_string()
            }
        },
        Clone::clone,
    )
}

/// Build the pipeline request from CLI options and the effective config
fn build_request(args: &ExportArgs, config: &Config) -> Result<ExportRequest, String> {
    let format = ExportFormat::from_str(&args.format)
        .map_err(|e| format!("✗ {e}. Use: json, html, or all"))?;

    if config.paths.input.is_empty() {
        return Err("✗ No input file given and config `input` is empty".to_string());
    }
    let out_dir = if config.paths.out_dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&config.paths.out_dir)
    };

    Ok(ExportRequest {
        input: PathBuf::from(&config.paths.input),
        out_dir,
        json_file: pick(args.json_name.as_ref(), &config.output.json_file, DEFAULT_JSON_FILE),
        html_file: pick(args.html_name.as_ref(), &config.output.html_file, DEFAULT_HTML_FILE),
        format,
        strict: args.strict,
        viewer: config.viewer_options(),
    })
}

/// Print a summary of the export
fn print_summary(report: &ExportReport) {
    println!("\n=== Summary ===");
    println!("{}", report.summary);
    if !report.dangling.is_empty() {
        println!(
            "⚠️  {} edge endpoint(s) reference unknown nodes",
            report.dangling.len()
        );
    }
}

/// Run the export command.
///
/// # Errors
/// Returns a user-facing message when the run fails.
pub fn run(args: &ExportArgs, config: &Config) -> Result<(), String> {
    let request = build_request(args, config)?;
    verbose!("Reading {}", request.input.display());

    let report = export_graph(&request).map_err(|e| {
        error!("Export failed for {}: {e}", request.input.display());
        format!("✗ Failed to export {}: {e}", request.input.display())
    })?;

    for path in report.json_path.iter().chain(report.html_path.iter()) {
        println!("✓ Written: {}", path.display());
    }
    print_summary(&report);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: &str) -> ExportArgs {
        ExportArgs {
            format: format.to_string(),
            ..ExportArgs::default()
        }
    }

    #[test]
    fn test_build_request_uses_config() {
        let mut config = Config::default();
        config.paths.input = "in.json".to_string();
        config.paths.out_dir = "site".to_string();
        config.output.json_file = "data.json".to_string();

        let request = build_request(&args("json"), &config).unwrap();
        assert_eq!(request.input, PathBuf::from("in.json"));
        assert_eq!(request.out_dir, PathBuf::from("site"));
        assert_eq!(request.json_file, "data.json");
        assert_eq!(request.html_file, DEFAULT_HTML_FILE);
        assert_eq!(request.format, ExportFormat::Json);
    }

    #[test]
    fn test_cli_names_win() {
        let mut config = Config::default();
        config.paths.input = "in.json".to_string();
        config.output.html_file = "configured.html".to_string();

        let mut export_args = args("all");
        export_args.html_name = Some("cli.html".to_string());

        let request = build_request(&export_args, &config).unwrap();
        assert_eq!(request.html_file, "cli.html");
        assert_eq!(request.out_dir, PathBuf::from("."));
    }

    #[test]
    fn test_bad_format_and_missing_input() {
        let mut config = Config::default();
        assert!(build_request(&args("all"), &config).is_err());

        config.paths.input = "in.json".to_string();
        let err = build_request(&args("pdf"), &config).unwrap_err();
        assert!(err.contains("unknown export format: pdf"));
    }
}
