//! CLI argument definitions for `netgraph`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use netgraph::config::ConfigOverrides;
use netgraph::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `out_dir`, `layout`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Convert a graph document into Cytoscape JSON and an HTML viewer.
    Export {
        /// Graph JSON file (defaults to config `input`)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Directory for the generated files (defaults to config `out_dir`)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// File name of the element JSON (defaults to config `json_file`)
        #[arg(long, value_name = "NAME")]
        json_name: Option<String>,

        /// File name of the viewer page (defaults to config `html_file`)
        #[arg(long, value_name = "NAME")]
        html_name: Option<String>,

        /// Artifacts to write: json, html, or all
        #[arg(short, long, value_name = "FORMAT", default_value = "all")]
        format: String,

        /// Fail when an edge references a node id that does not exist
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "netgraph",
    about = "Convert typed graph JSON into Cytoscape elements and an HTML viewer",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config output directory
    #[arg(long = "config-out-dir", value_name = "DIR")]
    pub config_out_dir: Option<PathBuf>,

    /// Override config output directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--out-dir` takes precedence over `--config-out-dir`, and an explicit
    /// export `-o DIR` or input FILE wins over both.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let (input, output_dir) = match &self.command {
            Command::Export {
                input, output_dir, ..
            } => (input.as_ref(), output_dir.as_ref()),
            Command::Config { .. } => (None, None),
        };

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            input: input.map(|p| p.to_string_lossy().to_string()),
            out_dir: output_dir
                .or(self.out_dir.as_ref())
                .or(self.config_out_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_out_dir: None,
            out_dir: None,
            command,
        }
    }

    fn export(input: Option<&str>, output_dir: Option<&str>) -> Command {
        Command::Export {
            input: input.map(PathBuf::from),
            output_dir: output_dir.map(PathBuf::from),
            json_name: None,
            html_name: None,
            format: "all".to_string(),
            strict: false,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.input.is_none());
        assert!(overrides.out_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut args = cli(export(Some("graph/in.json"), None));
        args.config_level = Some(LogLevelArg::Debug);
        args.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        args.config_verbose = Some(true);
        args.out_dir = Some(PathBuf::from("/output"));

        let overrides = args.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.input, Some("graph/in.json".to_string()));
        assert_eq!(overrides.out_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_out_dir_precedence() {
        let mut args = cli(export(None, Some("/cmd/out")));
        args.out_dir = Some(PathBuf::from("/short/out"));
        args.config_out_dir = Some(PathBuf::from("/long/out"));
        assert_eq!(
            args.to_config_overrides().out_dir,
            Some("/cmd/out".to_string())
        );

        let mut args = cli(export(None, None));
        args.out_dir = Some(PathBuf::from("/short/out"));
        args.config_out_dir = Some(PathBuf::from("/long/out"));
        assert_eq!(
            args.to_config_overrides().out_dir,
            Some("/short/out".to_string())
        );

        let mut args = cli(export(None, None));
        args.config_out_dir = Some(PathBuf::from("/long/out"));
        assert_eq!(
            args.to_config_overrides().out_dir,
            Some("/long/out".to_string())
        );
    }

    #[test]
    fn test_parse_export_command() {
        let args = Cli::parse_from([
            "netgraph",
            "--debug",
            "export",
            "in.json",
            "-o",
            "site",
            "--format",
            "html",
            "--strict",
        ]);
        assert!(args.debug_flag);
        match args.command {
            Command::Export {
                input,
                output_dir,
                format,
                strict,
                ..
            } => {
                assert_eq!(input, Some(PathBuf::from("in.json")));
                assert_eq!(output_dir, Some(PathBuf::from("site")));
                assert_eq!(format, "html");
                assert!(strict);
            }
            Command::Config { .. } => panic!("expected export command"),
        }
    }
}
