//! Pipeline coordinator - orchestrates batch conversion and evaluation
//!
//! Documents are scanned from a directory, processed `parallel_documents`
//! at a time, and folded into a [`ProcessingSummary`] in input order. A
//! failing document is recorded and skipped; a shutdown signal stops new
//! documents from being scheduled.

use super::batch::{
    convert_file, document_id_for, evaluate_document_file, evaluate_record_file, BatchConfig,
    DocumentResult,
};
use super::summary::ProcessingSummary;
use crate::adapters::filesystem::{scan_directory, HTML_EXTENSION, JSON_EXTENSION};
use crate::core::measure::Evaluation;
use crate::domain::{DocumentId, Result};
use crate::{log_document_failure, log_document_start};
use futures::future::{self, BoxFuture, FutureExt};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Pipeline coordinator
pub struct PipelineCoordinator {
    config: BatchConfig,
    shutdown_signal: watch::Receiver<bool>,
}

impl PipelineCoordinator {
    /// Create a new coordinator
    pub fn new(config: BatchConfig, shutdown_signal: watch::Receiver<bool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    /// Whether a shutdown has been requested
    pub fn is_shutdown_requested(&self) -> bool {
        *self.shutdown_signal.borrow()
    }

    /// Structure every HTML document in `input_dir` into `output_dir/<stem>.json`
    pub async fn convert_documents(
        &self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<ProcessingSummary> {
        tracing::info!(
            input = %input_dir.display(),
            output = %output_dir.display(),
            "Starting document conversion"
        );

        let markers = Arc::new(self.config.markers.clone());
        let output_dir = output_dir.to_path_buf();

        let record_written =
            |summary: &mut ProcessingSummary, _: PathBuf| summary.record_processed();
        self.run(input_dir, HTML_EXTENSION, record_written, move |id, path| {
            let markers = markers.clone();
            let output_dir = output_dir.clone();
            async move { convert_file(&id, &path, &output_dir, markers).await }.boxed()
        })
        .await
    }

    /// Evaluate every JSON patient record in `input_dir`
    pub async fn evaluate_records(&self, input_dir: &Path) -> Result<ProcessingSummary> {
        tracing::info!(input = %input_dir.display(), "Starting record evaluation");

        self.run(input_dir, JSON_EXTENSION, record_evaluation, |id, path| {
            async move { evaluate_record_file(&id, &path).await }.boxed()
        })
        .await
    }

    /// Structure and evaluate every HTML document in `input_dir`
    pub async fn evaluate_documents(&self, input_dir: &Path) -> Result<ProcessingSummary> {
        tracing::info!(input = %input_dir.display(), "Starting document evaluation");

        let markers = Arc::new(self.config.markers.clone());
        self.run(input_dir, HTML_EXTENSION, record_evaluation, move |id, path| {
            let markers = markers.clone();
            async move { evaluate_document_file(&id, &path, markers).await }.boxed()
        })
        .await
    }

    async fn run<T, W, R>(
        &self,
        input_dir: &Path,
        extension: &str,
        mut record: R,
        work: W,
    ) -> Result<ProcessingSummary>
    where
        T: Send + 'static,
        W: Fn(DocumentId, PathBuf) -> BoxFuture<'static, DocumentResult<T>>,
        R: FnMut(&mut ProcessingSummary, T),
    {
        let start_time = Instant::now();
        let mut summary = ProcessingSummary::new();

        let paths = scan_directory(input_dir, extension).await?;
        summary.total_documents = paths.len();

        if paths.is_empty() {
            tracing::warn!(
                directory = %input_dir.display(),
                extension,
                "No input documents found"
            );
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let shutdown = self.shutdown_signal.clone();
        let mut results = stream::iter(paths)
            .take_while(move |_| future::ready(!*shutdown.borrow()))
            .map(|path| {
                let unit: BoxFuture<'static, DocumentResult<T>> = match document_id_for(&path) {
                    Ok(id) => {
                        log_document_start!(id.as_str(), path.display());
                        work(id, path)
                    }
                    Err(detail) => future::ready(Err(detail)).boxed(),
                };
                unit
            })
            .buffered(self.config.parallel_documents);

        while let Some(result) = results.next().await {
            match result {
                Ok(value) => record(&mut summary, value),
                Err(detail) => {
                    log_document_failure!(
                        detail.document_id.as_deref().unwrap_or("-"),
                        detail.stage,
                        &detail.message
                    );
                    summary.add_failure(detail);
                }
            }
        }

        let seen = summary.processed + summary.failed;
        if seen < summary.total_documents {
            summary.interrupted = true;
            tracing::warn!(
                processed = seen,
                total = summary.total_documents,
                "Processing interrupted by shutdown signal"
            );
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }
}

fn record_evaluation(summary: &mut ProcessingSummary, evaluation: Evaluation) {
    summary.record_evaluation(evaluation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::structure::SectionMarkers;
    use crate::domain::NumeratorOutcome;
    use tempfile::TempDir;

    const ELIGIBLE_RECORD: &str = r#"{
        "patientDetails": {"id": "P-1", "dateOfBirth": "2015-01-01"},
        "encounters": [{
            "description": "Office Visit",
            "codes": {"CPT": "90834-HD"},
            "time": {"relevantPeriodStart": "2024-01-01"}
        }],
        "screening": [{
            "description": "Assessment, Performed",
            "result": {"result": "Depression Screening Negative"}
        }]
    }"#;

    fn coordinator(parallel: usize) -> (PipelineCoordinator, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        let config = BatchConfig::new(parallel, SectionMarkers::default());
        (PipelineCoordinator::new(config, rx), tx)
    }

    #[tokio::test]
    async fn test_evaluate_records_isolates_failures() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.json"), ELIGIBLE_RECORD).unwrap();
        std::fs::write(dir.path().join("b.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("c.json"), r#"{"patientDetails": {}}"#).unwrap();

        let (coordinator, _tx) = coordinator(2);
        let summary = coordinator.evaluate_records(dir.path()).await.unwrap();

        assert_eq!(summary.total_documents, 3);
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.outcome_count(NumeratorOutcome::ScreenNegativeNoFollowUpPlan), 1);
        assert_eq!(summary.errors[0].document_id.as_deref(), Some("b"));
        assert_eq!(summary.errors[1].document_id.as_deref(), Some("c"));
        assert!(summary.errors[1].data_quality);
        assert!(!summary.interrupted);
    }

    #[tokio::test]
    async fn test_empty_directory_yields_empty_summary() {
        let dir = TempDir::new().unwrap();
        let (coordinator, _tx) = coordinator(4);

        let summary = coordinator.evaluate_documents(dir.path()).await.unwrap();
        assert_eq!(summary.total_documents, 0);
        assert!(summary.is_successful());
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let (coordinator, _tx) = coordinator(1);

        assert!(coordinator
            .evaluate_records(&dir.path().join("missing"))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_shutdown_before_start_interrupts() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.json"), ELIGIBLE_RECORD).unwrap();

        let (coordinator, tx) = coordinator(1);
        tx.send(true).unwrap();

        let summary = coordinator.evaluate_records(dir.path()).await.unwrap();
        assert!(coordinator.is_shutdown_requested());
        assert_eq!(summary.processed, 0);
        assert!(summary.interrupted);
        assert!(!summary.is_successful());
    }
}
