//! Convert command implementation
//!
//! This module implements the `convert` command, which structures every
//! rendered HTML document in a directory into a JSON patient record.

use super::{load_command_config, EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_INTERRUPTED};
use crate::core::pipeline::{BatchConfig, PipelineCoordinator, ProcessingSummary};
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory of HTML documents (overrides input.html_dir)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for JSON records (overrides output.json_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting convert command");

        let Some(config) = load_command_config(config_path) else {
            return Ok(EXIT_CONFIG_ERROR);
        };

        let input_dir = self
            .input
            .clone()
            .unwrap_or_else(|| config.input.html_dir.clone());
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.output.json_dir.clone());

        println!("🔄 Converting documents");
        println!("  Input: {}", input_dir.display());
        println!("  Output: {}", output_dir.display());
        println!();

        let coordinator =
            PipelineCoordinator::new(BatchConfig::from_config(&config), shutdown_signal);
        let summary = match coordinator.convert_documents(&input_dir, &output_dir).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Conversion failed");
                eprintln!("❌ Conversion failed: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        print_conversion_summary(&summary);
        Ok(exit_code_for(&summary))
    }
}

fn print_conversion_summary(summary: &ProcessingSummary) {
    println!("📊 Conversion Summary:");
    println!("  Documents: {}", summary.total_documents);
    println!("  Converted: {}", summary.processed);
    println!("  Failed: {}", summary.failed);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if !summary.errors.is_empty() {
        println!("⚠️  Errors encountered:");
        for error in &summary.errors {
            println!(
                "  - {} ({:?}): {}",
                error.document_id.as_deref().unwrap_or("-"),
                error.stage,
                error.message
            );
        }
        println!();
    }
}

/// Map a finished run onto the process exit code
pub(crate) fn exit_code_for(summary: &ProcessingSummary) -> i32 {
    if summary.interrupted {
        println!("⚠️  Run interrupted before all documents were processed.");
        EXIT_INTERRUPTED
    } else if summary.is_successful() {
        println!("✅ Completed successfully!");
        0
    } else {
        println!("⚠️  Completed with failures");
        1
    }
}
