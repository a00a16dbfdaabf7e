//! Configuration module for `netgraph`

use crate::core::export::ViewerOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path-like values
const DIR_VARIABLE: &str = "$NETGRAPH";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Input/output locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Graph document read when no input is given on the command line
    #[serde(default)]
    pub input: String,
    /// Directory receiving both artifacts
    #[serde(default)]
    pub out_dir: String,
}

/// Artifact file names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File name of the element JSON
    #[serde(default)]
    pub json_file: String,
    /// File name of the viewer page
    #[serde(default)]
    pub html_file: String,
}

/// Viewer page settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Page title
    #[serde(default)]
    pub title: String,
    /// Visualization library script URL
    #[serde(default)]
    pub library_url: String,
    /// Layout name passed to the viewer
    #[serde(default)]
    pub layout: String,
    /// Initial background color
    #[serde(default)]
    pub background_color: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Output file names
    #[serde(default)]
    pub output: OutputConfig,
    /// Viewer settings
    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override input document path
    pub input: Option<String>,
    /// Override output directory
    pub out_dir: Option<String>,
}

/// Copy `default` into `value` when `value` is empty and `default` is not
fn fill_empty(value: &mut String, default: &str) -> bool {
    if value.is_empty() && !default.is_empty() {
        default.clone_into(value);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$NETGRAPH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/netgraph`
    /// - macOS: `~/Library/Application Support/netgraph`
    /// - Windows: `%APPDATA%\netgraph`
    #[must_use]
    pub fn get_netgraph_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("netgraph")
    }

    /// Get the user config file path (`dconfig.toml` in debug builds)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_netgraph_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` change, so
    /// new settings appear after an upgrade without touching user values.
    ///
    /// # Returns
    ///
    /// `true` if any field was filled in
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let pairs: [(&mut String, &String); 10] = [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.input, &defaults.paths.input),
            (&mut self.paths.out_dir, &defaults.paths.out_dir),
            (&mut self.output.json_file, &defaults.output.json_file),
            (&mut self.output.html_file, &defaults.output.html_file),
            (&mut self.viewer.title, &defaults.viewer.title),
            (&mut self.viewer.library_url, &defaults.viewer.library_url),
            (&mut self.viewer.layout, &defaults.viewer.layout),
            (
                &mut self.viewer.background_color,
                &defaults.viewer.background_color,
            ),
        ];

        pairs
            .into_iter()
            .fold(false, |changed, (value, default)| fill_empty(value, default) || changed)
    }

    /// Apply CLI-provided overrides for this run only
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(input) = &overrides.input {
            self.paths.input.clone_from(input);
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
    }

    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_netgraph_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string, expanding `$NETGRAPH` in path values
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.input = Self::expand_variables(&config.paths.input);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Load the compiled-in default configuration
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML, which
    /// cannot happen for a correctly built binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults on first run
    ///
    /// An existing file gets any missing fields filled from defaults and is
    /// saved back. Any read or parse failure falls back to the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        let Ok(content) = fs::read_to_string(&config_file) else {
            return defaults;
        };
        match Self::from_toml(&content) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            Err(_) => defaults,
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot
    /// be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `input`, `out_dir`,
    /// `json_file`, `html_file`, `title`, `library_url`, `layout`,
    /// `background_color`. Dashed spellings are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "level" => &self.logging.level,
            "file" => &self.logging.file,
            "verbose" => return Some(self.logging.verbose.to_string()),
            "input" => &self.paths.input,
            "out_dir" | "out-dir" => &self.paths.out_dir,
            "json_file" | "json-file" => &self.output.json_file,
            "html_file" | "html-file" => &self.output.html_file,
            "title" => &self.viewer.title,
            "library_url" | "library-url" => &self.viewer.library_url,
            "layout" => &self.viewer.layout,
            "background_color" | "background-color" => &self.viewer.background_color,
            _ => return None,
        };
        Some(value.clone())
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "level" => Some(&mut self.logging.level),
            "file" => Some(&mut self.logging.file),
            "input" => Some(&mut self.paths.input),
            "out_dir" | "out-dir" => Some(&mut self.paths.out_dir),
            "json_file" | "json-file" => Some(&mut self.output.json_file),
            "html_file" | "html-file" => Some(&mut self.output.html_file),
            "title" => Some(&mut self.viewer.title),
            "library_url" | "library-url" => Some(&mut self.viewer.library_url),
            "layout" => Some(&mut self.viewer.layout),
            "background_color" | "background-color" => Some(&mut self.viewer.background_color),
            _ => None,
        }
    }

    /// Set a configuration value by key. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or `verbose` is not a boolean.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        if key == "verbose" {
            self.logging.verbose = value
                .parse::<bool>()
                .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            return Ok(());
        }
        let field = self
            .field_mut(key)
            .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
        *field = value.to_string();
        Ok(())
    }

    /// Reset one value to its default. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        if key == "verbose" {
            self.logging.verbose = defaults.logging.verbose;
            return Ok(());
        }
        let default = defaults
            .get(key)
            .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
        if let Some(field) = self.field_mut(key) {
            *field = default;
        }
        Ok(())
    }

    /// Delete the config file so the next [`load()`](Config::load) recreates it
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Viewer page settings derived from the `[viewer]` section
    #[must_use]
    pub fn viewer_options(&self) -> ViewerOptions {
        let defaults = ViewerOptions::default();
        let or_default = |value: &str, default: String| {
            if value.is_empty() {
                default
            } else {
                value.to_string()
            }
        };
        ViewerOptions {
            title: or_default(&self.viewer.title, defaults.title),
            library_url: or_default(&self.viewer.library_url, defaults.library_url),
            layout: or_default(&self.viewer.layout, defaults.layout),
            background_color: or_default(&self.viewer.background_color, defaults.background_color),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  input = \"{}\"", self.paths.input)?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        writeln!(f, "\n[output]")?;
        writeln!(f, "  json_file = \"{}\"", self.output.json_file)?;
        writeln!(f, "  html_file = \"{}\"", self.output.html_file)?;

        writeln!(f, "\n[viewer]")?;
        writeln!(f, "  title = \"{}\"", self.viewer.title)?;
        writeln!(f, "  library_url = \"{}\"", self.viewer.library_url)?;
        writeln!(f, "  layout = \"{}\"", self.viewer.layout)?;
        writeln!(f, "  background_color = \"{}\"", self.viewer.background_color)?;

        Ok(())
    }
}
