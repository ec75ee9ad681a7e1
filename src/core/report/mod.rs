//! Measure report output
//!
//! Serializes a [`ProcessingSummary`](crate::core::pipeline::ProcessingSummary)
//! as a pretty-printed XML document.

pub mod xml;

pub use xml::{write_xml_report, write_xml_report_file};
