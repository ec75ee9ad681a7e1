//! Core business logic for depscreen.
//!
//! This module contains the document structurer, the measure logic, and the
//! batch orchestration around them.
//!
//! # Modules
//!
//! - [`extract`] - QDM detail extraction from section table rows
//! - [`structure`] - Document structuring into patient records
//! - [`measure`] - Denominator and numerator determination
//! - [`pipeline`] - Batch conversion and evaluation over directories
//! - [`report`] - XML measure report
//!
//! # Workflow
//!
//! 1. **Structure**: parse each rendered document and assemble a patient record
//! 2. **Denominator**: check age window and qualifying procedure codes
//! 3. **Numerator**: assign one outcome code to each eligible patient
//! 4. **Aggregate**: count populations and outcomes
//! 5. **Report**: print the summary and optionally write XML
//!
//! # Example
//!
//! ```rust
//! use depscreen::core::measure::{evaluate_patient, Evaluation};
//! use depscreen::core::structure::{structure_document, SectionMarkers};
//!
//! let html = r#"<div class="div-head-row"><div>Name</div><div>Jane</div></div>"#;
//! let record = structure_document(html, &SectionMarkers::default()).unwrap();
//!
//! // No encounters: a data-quality error, not an ineligible patient
//! assert!(evaluate_patient(record).is_err());
//! ```

pub mod extract;
pub mod markup;
pub mod measure;
pub mod pipeline;
pub mod report;
pub mod structure;
