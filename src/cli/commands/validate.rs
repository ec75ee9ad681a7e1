//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the depscreen configuration file.

use super::EXIT_CONFIG_ERROR;
use crate::config::load_config;
use crate::core::structure::SectionMarkers;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let markers = SectionMarkers::from_legacy_flag(config.structure.legacy_section_markers);

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  HTML Input: {}", config.input.html_dir.display());
        println!("  JSON Input: {}", config.input.json_dir.display());
        println!("  JSON Output: {}", config.output.json_dir.display());
        match (&config.output.report_path, config.output.write_report) {
            (Some(path), true) => println!("  Report: {}", path.display()),
            _ => println!("  Report: disabled"),
        }
        println!("  Parallel Documents: {}", config.processing.parallel_documents);
        println!(
            "  Section Markers: {}",
            if config.structure.legacy_section_markers {
                "legacy"
            } else {
                "distinct"
            }
        );
        if !markers.is_unambiguous() {
            println!("  ⚠️  Several sections share one panel heading");
        }
        println!(
            "  Local Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file_is_config_error() {
        let args = ValidateArgs {};
        let code = args.execute("does-not-exist.toml").await.unwrap();
        assert_eq!(code, EXIT_CONFIG_ERROR);
    }

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[processing]\nparallel_documents = 2\n").unwrap();
        file.flush().unwrap();

        let args = ValidateArgs {};
        let code = args.execute(&file.path().to_string_lossy()).await.unwrap();
        assert_eq!(code, 0);
    }
}
