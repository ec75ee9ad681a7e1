//! Evaluate command implementation
//!
//! This module implements the `evaluate` command: classify every patient in
//! a directory against the measure, print the populations, and optionally
//! write the XML measure report.

use super::convert::exit_code_for;
use super::{load_command_config, EXIT_CONFIG_ERROR, EXIT_FATAL};
use crate::config::DepscreenConfig;
use crate::core::pipeline::{BatchConfig, PipelineCoordinator, ProcessingSummary};
use crate::core::report::write_xml_report_file;
use crate::domain::NumeratorOutcome;
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

/// Arguments for the evaluate command
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Input directory (overrides input.json_dir, or input.html_dir with --html)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Read rendered HTML documents instead of JSON patient records
    #[arg(long)]
    pub html: bool,

    /// Write the XML measure report to this path
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!(html = self.html, "Starting evaluate command");

        let Some(config) = load_command_config(config_path) else {
            return Ok(EXIT_CONFIG_ERROR);
        };

        let input_dir = self.input_dir(&config);
        println!("🩺 Evaluating depression screening measure");
        println!("  Input: {}", input_dir.display());
        println!(
            "  Source: {}",
            if self.html { "HTML documents" } else { "JSON records" }
        );
        println!();

        let coordinator =
            PipelineCoordinator::new(BatchConfig::from_config(&config), shutdown_signal);
        let result = if self.html {
            coordinator.evaluate_documents(&input_dir).await
        } else {
            coordinator.evaluate_records(&input_dir).await
        };

        let summary = match result {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Evaluation failed");
                eprintln!("❌ Evaluation failed: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        print_evaluation_summary(&summary);

        if let Some(report_path) = self.report_path(&config) {
            match write_xml_report_file(&summary, &report_path) {
                Ok(()) => {
                    tracing::info!(path = %report_path.display(), "Measure report written");
                    println!("📄 Report written: {}", report_path.display());
                    println!();
                }
                Err(e) => {
                    tracing::error!(error = %e, path = %report_path.display(), "Report failed");
                    eprintln!("❌ Failed to write report: {e}");
                    return Ok(EXIT_FATAL);
                }
            }
        }

        Ok(exit_code_for(&summary))
    }

    fn input_dir(&self, config: &DepscreenConfig) -> PathBuf {
        match (&self.input, self.html) {
            (Some(dir), _) => dir.clone(),
            (None, true) => config.input.html_dir.clone(),
            (None, false) => config.input.json_dir.clone(),
        }
    }

    /// `--report` wins; otherwise the configured path when `write_report` is set
    fn report_path(&self, config: &DepscreenConfig) -> Option<PathBuf> {
        self.report.clone().or_else(|| {
            config
                .output
                .write_report
                .then(|| config.output.report_path.clone())
                .flatten()
        })
    }
}

fn print_evaluation_summary(summary: &ProcessingSummary) {
    println!("📊 Measure Summary:");
    println!("  Documents: {}", summary.total_documents);
    println!("  Eligible Population: {}", summary.eligible_count());
    println!("  Ineligible Population: {}", summary.ineligible_count());
    println!("  Failed: {}", summary.failed);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if summary.eligible_count() > 0 {
        println!("🧾 Numerator Outcomes:");
        for outcome in NumeratorOutcome::ALL {
            println!("  {}: {}", outcome, summary.outcome_count(outcome));
        }
        println!();
    }

    if !summary.errors.is_empty() {
        println!(
            "⚠️  Errors encountered ({} data quality):",
            summary.data_quality_failures()
        );
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args(input: Option<&str>, html: bool, report: Option<&str>) -> EvaluateArgs {
        EvaluateArgs {
            input: input.map(PathBuf::from),
            html,
            report: report.map(PathBuf::from),
        }
    }

    #[test]
    fn test_input_dir_follows_source_kind() {
        let config = DepscreenConfig::default();
        assert_eq!(args(None, false, None).input_dir(&config), Path::new("data/json"));
        assert_eq!(args(None, true, None).input_dir(&config), Path::new("data/html"));
        assert_eq!(
            args(Some("fixtures"), true, None).input_dir(&config),
            Path::new("fixtures")
        );
    }

    #[test]
    fn test_report_path_resolution() {
        let mut config = DepscreenConfig::default();
        assert_eq!(args(None, false, None).report_path(&config), None);

        config.output.report_path = Some(PathBuf::from("reports/measure.xml"));
        assert_eq!(args(None, false, None).report_path(&config), None);

        config.output.write_report = true;
        assert_eq!(
            args(None, false, None).report_path(&config),
            Some(PathBuf::from("reports/measure.xml"))
        );
        assert_eq!(
            args(None, false, Some("cli.xml")).report_path(&config),
            Some(PathBuf::from("cli.xml"))
        );
    }
}
