//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Document identifier newtype wrapper
///
/// Identifies one source document within a batch. For documents read from
/// disk this is the file stem, so `patient-001.html` and the structured
/// `patient-001.json` share an identifier.
///
/// # Examples
///
/// ```
/// use depscreen::domain::ids::DocumentId;
/// use std::str::FromStr;
///
/// let id = DocumentId::from_str("patient-001").unwrap();
/// assert_eq!(id.as_str(), "patient-001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new DocumentId from a string
    ///
    /// Returns `Err` if the identifier is empty or whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Document ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Derives the identifier from a file path (its stem)
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| format!("Path has no file name: {}", path.display()))?;
        Self::new(stem)
    }

    /// Returns the document ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
