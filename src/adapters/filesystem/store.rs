//! Reading documents and writing structured records

use crate::domain::{DocumentId, MeasureError, PatientRecord, Result};
use std::path::{Path, PathBuf};

/// Read a whole input document as UTF-8 text
pub async fn read_document(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| MeasureError::Io(format!("Failed to read {}: {e}", path.display())))
}

/// Write a patient record as pretty-printed JSON to `<output_dir>/<id>.json`
///
/// The output directory is created if needed. Returns the written path.
pub async fn write_patient_record(
    output_dir: &Path,
    document_id: &DocumentId,
    record: &PatientRecord,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir).await.map_err(|e| {
        MeasureError::Io(format!(
            "Failed to create output directory {}: {e}",
            output_dir.display()
        ))
    })?;

    let path = output_dir.join(format!("{}.json", document_id.as_str()));
    let json = record.to_json_pretty()?;
    tokio::fs::write(&path, json)
        .await
        .map_err(|e| MeasureError::Io(format!("Failed to write {}: {e}", path.display())))?;

    tracing::debug!(
        document_id = %document_id,
        path = %path.display(),
        "Wrote patient record"
    );

    Ok(path)
}
