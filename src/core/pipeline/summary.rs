//! Processing summary and reporting
//!
//! This module defines the structure that tracks and reports the results of
//! one batch run.

use crate::core::measure::Evaluation;
use crate::domain::{DocumentErrorDetail, NumeratorOutcome, PatientRecord};
use std::collections::BTreeMap;
use std::time::Duration;

/// Summary of a conversion or evaluation run
#[derive(Debug, Clone, Default)]
pub struct ProcessingSummary {
    /// Number of documents found in the input directory
    pub total_documents: usize,

    /// Number of documents processed without error
    pub processed: usize,

    /// Number of documents that failed
    pub failed: usize,

    /// Records that met the denominator criteria
    pub eligible_population: Vec<PatientRecord>,

    /// Records that did not meet the denominator criteria
    pub ineligible_population: Vec<PatientRecord>,

    /// Patient count per numerator outcome
    pub results: BTreeMap<NumeratorOutcome, usize>,

    /// Per-document failures
    pub errors: Vec<DocumentErrorDetail>,

    /// Duration of the run
    pub duration: Duration,

    /// Whether a shutdown signal stopped the run before every document was seen
    pub interrupted: bool,
}

impl ProcessingSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a document processed without classification (conversion)
    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    /// Record the evaluation of one patient
    pub fn record_evaluation(&mut self, evaluation: Evaluation) {
        self.processed += 1;
        match evaluation {
            Evaluation::Eligible { record, outcome } => {
                *self.results.entry(outcome).or_insert(0) += 1;
                self.eligible_population.push(record);
            }
            Evaluation::Ineligible { record } => {
                self.ineligible_population.push(record);
            }
        }
    }

    /// Record a failed document
    pub fn add_failure(&mut self, error: DocumentErrorDetail) {
        self.failed += 1;
        self.errors.push(error);
    }

    /// Size of the eligible population
    pub fn eligible_count(&self) -> usize {
        self.eligible_population.len()
    }

    /// Size of the ineligible population
    pub fn ineligible_count(&self) -> usize {
        self.ineligible_population.len()
    }

    /// Patients assigned `outcome`
    pub fn outcome_count(&self, outcome: NumeratorOutcome) -> usize {
        self.results.get(&outcome).copied().unwrap_or(0)
    }

    /// Number of failures caused by missing or invalid clinical data
    pub fn data_quality_failures(&self) -> usize {
        self.errors.iter().filter(|e| e.data_quality).count()
    }

    /// Check if the run was successful (no failures, not interrupted)
    pub fn is_successful(&self) -> bool {
        self.failed == 0 && self.errors.is_empty() && !self.interrupted
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_documents = self.total_documents,
            processed = self.processed,
            failed = self.failed,
            eligible = self.eligible_count(),
            ineligible = self.ineligible_count(),
            duration_ms = self.duration.as_millis() as u64,
            interrupted = self.interrupted,
            "Processing completed"
        );

        for (outcome, count) in &self.results {
            tracing::info!(outcome = %outcome, count, "Numerator outcome");
        }

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                data_quality = self.data_quality_failures(),
                "Processing completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    document_id = error.document_id.as_deref().unwrap_or("-"),
                    stage = ?error.stage,
                    message = %error.message,
                    "Document error"
                );
            }
        }
    }
}
