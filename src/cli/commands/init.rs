//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "depscreen.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing depscreen configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your directories", self.output);
                println!("  2. Validate configuration: depscreen validate-config");
                println!("  3. Structure documents: depscreen convert");
                println!("  4. Run the measure: depscreen evaluate --report reports/measure.xml");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Sample configuration with every section at its default
    fn generate_config() -> &'static str {
        r#"# depscreen Configuration File
# Depression screening quality measure engine

[application]
log_level = "info"  # trace | debug | info | warn | error

[input]
# Rendered patient documents
html_dir = "data/html"
# Structured JSON patient records
json_dir = "data/json"

[output]
# Destination of `depscreen convert`
json_dir = "data/json"
# XML measure report written by `depscreen evaluate`
report_path = "reports/measure.xml"
write_report = false

[processing]
# Documents processed concurrently (1-64)
parallel_documents = 4

[structure]
# Reproduce the historical lookup where intervention rows come from the
# medication panel and sex rows from the birthdate panel
legacy_section_markers = false

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly
"#
    }
}
