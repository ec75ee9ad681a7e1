//! Domain models and types for depscreen.
//!
//! This module contains the core domain models, types, and errors shared by
//! the structurer, the measure determiners, and the batch pipeline.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Patient records** ([`PatientRecord`], [`Demographics`], [`QdmDetail`])
//! - **Section identifiers** ([`ClinicalSection`])
//! - **Outcomes** ([`EligibilityOutcome`], [`ScreeningResult`], [`NumeratorOutcome`])
//! - **Error types** ([`MeasureError`], [`DocumentErrorDetail`])
//! - **Result type alias** ([`Result`])
//!
//! # Parsing
//!
//! Patient records are parsed through an explicit factory that returns a
//! typed error instead of panicking:
//!
//! ```rust
//! use depscreen::domain::{MeasureError, PatientRecord};
//!
//! let parsed = PatientRecord::from_json("{ broken");
//! assert!(matches!(parsed, Err(MeasureError::Parse(_))));
//! ```

pub mod errors;
pub mod ids;
pub mod outcome;
pub mod patient;
pub mod qdm;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{DocumentErrorDetail, MeasureError, ProcessingStage};
pub use ids::DocumentId;
pub use outcome::{EligibilityOutcome, NumeratorOutcome, ScreeningResult};
pub use patient::{ClinicalSection, Demographics, PatientRecord, PatientRecordBuilder};
pub use qdm::QdmDetail;
pub use result::Result;
