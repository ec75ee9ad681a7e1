//! Configuration schema types
//!
//! This module defines the configuration structure for depscreen. Every
//! section is optional in the TOML file and falls back to its defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for `processing.parallel_documents`
pub const MAX_PARALLEL_DOCUMENTS: usize = 64;

/// Main depscreen configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepscreenConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input directories
    #[serde(default)]
    pub input: InputConfig,

    /// Output locations
    #[serde(default)]
    pub output: OutputConfig,

    /// Batch processing settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Document structuring settings
    #[serde(default)]
    pub structure: StructureConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DepscreenConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.input.validate()?;
        self.output.validate()?;
        self.processing.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Input directories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory of rendered HTML documents
    #[serde(default = "default_html_dir")]
    pub html_dir: PathBuf,

    /// Directory of structured JSON patient records
    #[serde(default = "default_json_dir")]
    pub json_dir: PathBuf,
}

impl InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.html_dir.as_os_str().is_empty() {
            return Err("input.html_dir cannot be empty".to_string());
        }
        if self.json_dir.as_os_str().is_empty() {
            return Err("input.json_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            html_dir: default_html_dir(),
            json_dir: default_json_dir(),
        }
    }
}

/// Output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives structured JSON records
    #[serde(default = "default_json_dir")]
    pub json_dir: PathBuf,

    /// Path of the XML measure report
    #[serde(default)]
    pub report_path: Option<PathBuf>,

    /// Write the XML report after evaluation
    #[serde(default)]
    pub write_report: bool,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.json_dir.as_os_str().is_empty() {
            return Err("output.json_dir cannot be empty".to_string());
        }
        if self.write_report && self.report_path.is_none() {
            return Err("output.report_path is required when output.write_report = true".to_string());
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_dir: default_json_dir(),
            report_path: None,
            write_report: false,
        }
    }
}

/// Batch processing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Number of documents processed concurrently
    #[serde(default = "default_parallel_documents")]
    pub parallel_documents: usize,
}

impl ProcessingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.parallel_documents == 0 || self.parallel_documents > MAX_PARALLEL_DOCUMENTS {
            return Err(format!(
                "processing.parallel_documents must be between 1 and {MAX_PARALLEL_DOCUMENTS}"
            ));
        }
        Ok(())
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            parallel_documents: default_parallel_documents(),
        }
    }
}

/// Document structuring settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureConfig {
    /// Reproduce the historical section lookup, where intervention rows
    /// come from the medication panel and sex rows from the birthdate panel
    #[serde(default)]
    pub legacy_section_markers: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_html_dir() -> PathBuf {
    PathBuf::from("data/html")
}

fn default_json_dir() -> PathBuf {
    PathBuf::from("data/json")
}

fn default_parallel_documents() -> usize {
    4
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
