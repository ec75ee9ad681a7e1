//! Measure outcome types
//!
//! Results produced by the denominator and numerator determiners.

use super::errors::MeasureError;
use super::patient::PatientRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of the denominator evaluation for one patient
///
/// The full patient record is carried regardless of eligibility so that
/// the ineligible population can be reported as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityOutcome {
    /// Whether the patient belongs to the measure population
    pub eligible: bool,

    /// The evaluated patient record
    pub patient_data: PatientRecord,
}

/// Classification of the first screening record
///
/// `Unclassified` is reached when a screening exists and its result map
/// is non-empty but holds neither a `result` nor a `negationReason`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreeningResult {
    Positive,
    Negative,
    IncompleteMedicalReason,
    NotDocumented,
    DataCompletenessNotMet,
    Unclassified,
}

impl ScreeningResult {
    /// Stable identifier used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreeningResult::Positive => "positive",
            ScreeningResult::Negative => "negative",
            ScreeningResult::IncompleteMedicalReason => "incompleteMedicalReason",
            ScreeningResult::NotDocumented => "notDocumented",
            ScreeningResult::DataCompletenessNotMet => "dataCompletenessNotMet",
            ScreeningResult::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for ScreeningResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numerator outcome code, one per eligible patient
///
/// Variants are declared in rule-chain order; the derived ordering is
/// used when outcomes are tabulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NumeratorOutcome {
    #[serde(rename = "bipolar-G9717")]
    Bipolar,
    #[serde(rename = "screenPositiveFollowUpPlan-G8431")]
    ScreenPositiveFollowUpPlan,
    #[serde(rename = "screenNegativeNoFollowUpPlan-G8510")]
    ScreenNegativeNoFollowUpPlan,
    #[serde(rename = "screenIncompleteMedicalReason-G8433")]
    ScreenIncompleteMedicalReason,
    #[serde(rename = "screenNotDocumented-G8432")]
    ScreenNotDocumented,
    #[serde(rename = "screenPositiveNoFollowUpPlan-G8511")]
    ScreenPositiveNoFollowUpPlan,
    #[serde(rename = "dataCompletenessNotMet")]
    DataCompletenessNotMet,
}

impl NumeratorOutcome {
    /// All outcome codes in rule-chain order
    pub const ALL: [NumeratorOutcome; 7] = [
        NumeratorOutcome::Bipolar,
        NumeratorOutcome::ScreenPositiveFollowUpPlan,
        NumeratorOutcome::ScreenNegativeNoFollowUpPlan,
        NumeratorOutcome::ScreenIncompleteMedicalReason,
        NumeratorOutcome::ScreenNotDocumented,
        NumeratorOutcome::ScreenPositiveNoFollowUpPlan,
        NumeratorOutcome::DataCompletenessNotMet,
    ];

    /// The quality-measure code string
    pub fn code(&self) -> &'static str {
        match self {
            NumeratorOutcome::Bipolar => "bipolar-G9717",
            NumeratorOutcome::ScreenPositiveFollowUpPlan => "screenPositiveFollowUpPlan-G8431",
            NumeratorOutcome::ScreenNegativeNoFollowUpPlan => "screenNegativeNoFollowUpPlan-G8510",
            NumeratorOutcome::ScreenIncompleteMedicalReason => {
                "screenIncompleteMedicalReason-G8433"
            }
            NumeratorOutcome::ScreenNotDocumented => "screenNotDocumented-G8432",
            NumeratorOutcome::ScreenPositiveNoFollowUpPlan => "screenPositiveNoFollowUpPlan-G8511",
            NumeratorOutcome::DataCompletenessNotMet => "dataCompletenessNotMet",
        }
    }
}

impl fmt::Display for NumeratorOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for NumeratorOutcome {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumeratorOutcome::ALL
            .into_iter()
            .find(|outcome| outcome.code() == s)
            .ok_or_else(|| MeasureError::Parse(format!("Unknown numerator outcome code: {s}")))
    }
}
