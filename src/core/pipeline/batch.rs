//! Batch configuration and per-document units of work
//!
//! Each unit reads one file, does its CPU-bound work on the blocking pool,
//! and reports either a value or a [`DocumentErrorDetail`] tagged with the
//! stage that failed. Nothing here aborts a batch.

use crate::adapters::filesystem::{read_document, write_patient_record};
use crate::config::DepscreenConfig;
use crate::core::measure::{evaluate_patient, Evaluation};
use crate::core::structure::{structure_document, SectionMarkers};
use crate::domain::{DocumentErrorDetail, DocumentId, MeasureError, PatientRecord, ProcessingStage};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Configuration for batch processing
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Number of documents in flight at once (1-64)
    pub parallel_documents: usize,
    /// Section heading markers used when structuring documents
    pub markers: SectionMarkers,
}

impl BatchConfig {
    /// Create a new batch configuration
    pub fn new(parallel_documents: usize, markers: SectionMarkers) -> Self {
        Self {
            parallel_documents: parallel_documents.max(1),
            markers,
        }
    }

    /// Create from the loaded configuration
    pub fn from_config(config: &DepscreenConfig) -> Self {
        Self::new(
            config.processing.parallel_documents,
            SectionMarkers::from_legacy_flag(config.structure.legacy_section_markers),
        )
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(1, SectionMarkers::default())
    }
}

/// Result of one unit of work
pub type DocumentResult<T> = std::result::Result<T, DocumentErrorDetail>;

fn failure(
    document_id: &DocumentId,
    stage: ProcessingStage,
    error: &MeasureError,
) -> DocumentErrorDetail {
    DocumentErrorDetail::from_error(stage, error).with_document_id(document_id.as_str())
}

async fn blocking<T, F>(
    document_id: &DocumentId,
    stage: ProcessingStage,
    work: F,
) -> DocumentResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> crate::domain::Result<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(result) => result.map_err(|e| failure(document_id, stage, &e)),
        Err(join_error) => Err(failure(
            document_id,
            stage,
            &MeasureError::Other(format!("worker task failed: {join_error}")),
        )),
    }
}

/// Identifier for a scanned path
pub fn document_id_for(path: &Path) -> DocumentResult<DocumentId> {
    DocumentId::from_path(path).map_err(|message| {
        DocumentErrorDetail::new(ProcessingStage::Read, message)
            .with_document_id(path.display().to_string())
    })
}

async fn read(document_id: &DocumentId, path: &Path) -> DocumentResult<String> {
    read_document(path)
        .await
        .map_err(|e| failure(document_id, ProcessingStage::Read, &e))
}

/// Structure one HTML document into a patient record
pub async fn structure_file(
    document_id: &DocumentId,
    path: &Path,
    markers: Arc<SectionMarkers>,
) -> DocumentResult<PatientRecord> {
    let html = read(document_id, path).await?;
    blocking(document_id, ProcessingStage::Parse, move || {
        structure_document(&html, &markers)
    })
    .await
}

/// Structure one HTML document and write its JSON record
pub async fn convert_file(
    document_id: &DocumentId,
    path: &Path,
    output_dir: &Path,
    markers: Arc<SectionMarkers>,
) -> DocumentResult<PathBuf> {
    let record = structure_file(document_id, path, markers).await?;
    write_patient_record(output_dir, document_id, &record)
        .await
        .map_err(|e| failure(document_id, ProcessingStage::Write, &e))
}

/// Evaluate one JSON patient record
pub async fn evaluate_record_file(
    document_id: &DocumentId,
    path: &Path,
) -> DocumentResult<Evaluation> {
    let json = read(document_id, path).await?;
    let record = PatientRecord::from_json(&json)
        .map_err(|e| failure(document_id, ProcessingStage::Parse, &e))?;
    blocking(document_id, ProcessingStage::Classify, move || {
        evaluate_patient(record)
    })
    .await
}

/// Structure and evaluate one HTML document
pub async fn evaluate_document_file(
    document_id: &DocumentId,
    path: &Path,
    markers: Arc<SectionMarkers>,
) -> DocumentResult<Evaluation> {
    let record = structure_file(document_id, path, markers).await?;
    blocking(document_id, ProcessingStage::Classify, move || {
        evaluate_patient(record)
    })
    .await
}
