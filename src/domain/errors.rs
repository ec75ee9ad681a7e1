//! Domain error types
//!
//! This module defines the error hierarchy for depscreen.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main depscreen error type
///
/// This is the primary error type used throughout the application.
/// Structural extraction problems (a missing panel, a missing cell) are
/// never errors; they degrade to empty data and a log line. Everything
/// here is either fatal for a single document or fatal for the run.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input could not be parsed into a document or patient record
    #[error("Parse error: {0}")]
    Parse(String),

    /// Clinical data required by a criterion is absent
    ///
    /// This is a data-quality condition, distinct from ineligibility.
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// A date value could not be interpreted
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Report writing errors
    #[error("Report error: {0}")]
    Report(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl MeasureError {
    /// Returns true when the error reflects a data-quality problem in the
    /// patient record rather than an I/O or parse failure
    pub fn is_data_quality(&self) -> bool {
        matches!(
            self,
            MeasureError::MissingData(_) | MeasureError::InvalidDate { .. }
        )
    }
}

/// Stage of the pipeline in which a document failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Reading the document from disk
    Read,
    /// Structuring HTML or parsing JSON
    Parse,
    /// Denominator or numerator evaluation
    Classify,
    /// Writing the structured record
    Write,
}

/// Per-document error details
///
/// Provides additional context for a single document failure so the
/// batch can continue while the failure is still reported.
#[derive(Debug, Clone)]
pub struct DocumentErrorDetail {
    /// Document identifier (file stem) associated with the error
    pub document_id: Option<String>,

    /// Stage in which the failure occurred
    pub stage: ProcessingStage,

    /// Error message
    pub message: String,

    /// Whether the failure is a data-quality problem
    pub data_quality: bool,
}

impl DocumentErrorDetail {
    /// Creates a new error detail for the given stage
    pub fn new(stage: ProcessingStage, message: impl Into<String>) -> Self {
        Self {
            document_id: None,
            stage,
            message: message.into(),
            data_quality: false,
        }
    }

    /// Creates an error detail from a [`MeasureError`]
    pub fn from_error(stage: ProcessingStage, error: &MeasureError) -> Self {
        Self {
            document_id: None,
            stage,
            message: error.to_string(),
            data_quality: error.is_data_quality(),
        }
    }

    /// Sets the document ID
    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for MeasureError {
    fn from(err: std::io::Error) -> Self {
        MeasureError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MeasureError {
    fn from(err: serde_json::Error) -> Self {
        MeasureError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MeasureError {
    fn from(err: toml::de::Error) -> Self {
        MeasureError::Configuration(format!("TOML parse error: {err}"))
    }
}
