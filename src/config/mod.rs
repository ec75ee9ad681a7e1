//! Configuration management for depscreen.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! depscreen uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `DEPSCREEN_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use depscreen::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("depscreen.toml")?;
//!
//! println!("HTML input: {}", config.input.html_dir.display());
//! println!("Parallel documents: {}", config.processing.parallel_documents);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`InputConfig`] - Input directories
//! - [`OutputConfig`] - JSON output directory and XML report
//! - [`ProcessingConfig`] - Batch parallelism
//! - [`StructureConfig`] - Section lookup behaviour
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [input]
//! html_dir = "data/html"
//! json_dir = "${DEPSCREEN_DATA}/json"
//!
//! [output]
//! json_dir = "data/json"
//! report_path = "reports/measure.xml"
//! write_report = true
//!
//! [processing]
//! parallel_documents = 4
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{
    ApplicationConfig, DepscreenConfig, InputConfig, LoggingConfig, OutputConfig,
    ProcessingConfig, StructureConfig,
};
