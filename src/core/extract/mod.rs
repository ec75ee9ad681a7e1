//! QDM detail extraction
//!
//! Turns the rows of one rendered section table into [`QdmDetail`]
//! records. Extraction is a pure transform: malformed rows degrade to
//! partially populated records and nothing is ever reported as an error.
//!
//! [`QdmDetail`]: crate::domain::QdmDetail

pub mod keys;
pub mod rows;

pub use keys::{derive_key, parse_label_line};
pub use rows::{extract_qdm_details, extract_row};
