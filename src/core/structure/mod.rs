//! Document structuring
//!
//! Locates the header block and the clinical section panels of a rendered
//! QDM document and assembles a [`PatientRecord`]. Missing panels and
//! cells degrade to empty data; they are logged, never returned as errors.
//!
//! ```rust
//! use depscreen::core::structure::{structure_document, SectionMarkers};
//!
//! let html = r#"<div class="panel-default">
//!   <div class="panel-heading"><h3 class="panel-title">Diagnosis</h3></div>
//! </div>"#;
//!
//! let record = structure_document(html, &SectionMarkers::default()).unwrap();
//! assert!(record.diagnoses.is_empty());
//! ```
//!
//! [`PatientRecord`]: crate::domain::PatientRecord

pub mod demographics;
pub mod document;
pub mod sections;

pub use demographics::extract_demographics;
pub use document::{structure_document, PatientDocument};
pub use sections::SectionMarkers;
