//! Local filesystem adapter
//!
//! Input documents and structured records live in plain directories. All
//! operations are async (`tokio::fs`) and map failures to
//! [`MeasureError::Io`](crate::domain::MeasureError::Io).

pub mod scanner;
pub mod store;

pub use scanner::scan_directory;
pub use store::{read_document, write_patient_record};

/// Extension of rendered input documents
pub const HTML_EXTENSION: &str = "html";

/// Extension of structured patient records
pub const JSON_EXTENSION: &str = "json";
