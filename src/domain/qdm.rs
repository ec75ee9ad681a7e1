//! QDM detail domain model
//!
//! A [`QdmDetail`] is one row of a clinical section in a rendered QDM
//! document: a description plus three label/value maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One structurally uniform row of a clinical section
///
/// Map keys are unique; when a label repeats within a cell the first
/// occurrence is kept. Maps preserve document order so that serialized
/// records are stable across runs.
///
/// # Examples
///
/// ```
/// use depscreen::domain::qdm::QdmDetail;
///
/// let encounter = QdmDetail::new("Encounter, Performed: Office Visit")
///     .with_code("CPT", "99213-Office Visit")
///     .with_time("relevantPeriodStart", "2024-01-01T09:00:00");
///
/// assert_eq!(encounter.code("CPT"), Some("99213-Office Visit"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QdmDetail {
    /// Free-text description from the row heading
    #[serde(default)]
    pub description: String,

    /// Code system name (e.g. "CPT") to code string
    #[serde(default)]
    pub codes: IndexMap<String, String>,

    /// Derived time key (e.g. "relevantPeriodStart") to value
    #[serde(default)]
    pub time: IndexMap<String, String>,

    /// Derived result key (e.g. "result", "negationReason") to value
    #[serde(default)]
    pub result: IndexMap<String, String>,
}

impl QdmDetail {
    /// Creates a detail with the given description and empty maps
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Adds a code entry, keeping any existing value for the same system
    pub fn with_code(mut self, system: impl Into<String>, code: impl Into<String>) -> Self {
        self.codes.entry(system.into()).or_insert_with(|| code.into());
        self
    }

    /// Adds a time entry, keeping any existing value for the same key
    pub fn with_time(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.time.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    /// Adds a result entry, keeping any existing value for the same key
    pub fn with_result(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.result.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    /// Returns the code for a code system
    pub fn code(&self, system: &str) -> Option<&str> {
        self.codes.get(system).map(String::as_str)
    }

    /// Returns a time value if present and non-empty after trimming
    pub fn time_value(&self, key: &str) -> Option<&str> {
        non_empty(self.time.get(key))
    }

    /// Returns a result value if present and non-empty after trimming
    pub fn result_value(&self, key: &str) -> Option<&str> {
        non_empty(self.result.get(key))
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}
