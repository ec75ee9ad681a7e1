//! Numerator (outcome classification) evaluation

use crate::domain::{NumeratorOutcome, PatientRecord, ScreeningResult};

const POSITIVE_SCREEN_PHRASE: &str = "depression screening positive";
const BIPOLAR_TERM: &str = "bipolar";

/// Assigns one numerator outcome code to an eligible patient
///
/// The screening classification is computed once, on construction, from
/// the first screening record. Rules are then tried in a fixed order and
/// the first match wins.
#[derive(Debug)]
pub struct NumeratorDeterminer<'a> {
    record: &'a PatientRecord,
    screening: ScreeningResult,
}

impl<'a> NumeratorDeterminer<'a> {
    pub fn new(record: &'a PatientRecord) -> Self {
        Self {
            record,
            screening: classify_screening(record),
        }
    }

    /// Any diagnosis description mentions bipolar disorder
    pub fn check_bipolar_disorder(&self) -> bool {
        self.record
            .diagnoses
            .iter()
            .any(|diagnosis| diagnosis.description.to_lowercase().contains(BIPOLAR_TERM))
    }

    /// Classification of the first screening record
    pub fn check_screening(&self) -> ScreeningResult {
        self.screening
    }

    fn has_medication(&self) -> bool {
        !self.record.medication.is_empty()
    }

    fn has_intervention(&self) -> bool {
        !self.record.intervention.is_empty()
    }

    pub fn check_screen_positive_and_follow_up_plan(&self) -> bool {
        self.screening == ScreeningResult::Positive
            && self.has_medication()
            && self.has_intervention()
    }

    pub fn check_screen_negative_and_no_follow_up_plan(&self) -> bool {
        self.screening == ScreeningResult::Negative
    }

    pub fn check_screen_incomplete_medical_reason(&self) -> bool {
        self.screening == ScreeningResult::IncompleteMedicalReason
    }

    pub fn check_screen_not_documented(&self) -> bool {
        self.screening == ScreeningResult::NotDocumented
    }

    /// Positive screen with only part of the follow-up plan
    ///
    /// Evaluated after the full follow-up rule, so it only fires when
    /// medication or intervention is missing.
    pub fn check_screen_positive_and_no_follow_up_plan(&self) -> bool {
        self.screening == ScreeningResult::Positive
            && (self.has_medication() || self.has_intervention())
    }

    /// The outcome code, always exactly one
    pub fn check_numerator(&self) -> NumeratorOutcome {
        let outcome = if self.check_bipolar_disorder() {
            NumeratorOutcome::Bipolar
        } else if self.check_screen_positive_and_follow_up_plan() {
            NumeratorOutcome::ScreenPositiveFollowUpPlan
        } else if self.check_screen_negative_and_no_follow_up_plan() {
            NumeratorOutcome::ScreenNegativeNoFollowUpPlan
        } else if self.check_screen_incomplete_medical_reason() {
            NumeratorOutcome::ScreenIncompleteMedicalReason
        } else if self.check_screen_not_documented() {
            NumeratorOutcome::ScreenNotDocumented
        } else if self.check_screen_positive_and_no_follow_up_plan() {
            NumeratorOutcome::ScreenPositiveNoFollowUpPlan
        } else {
            NumeratorOutcome::DataCompletenessNotMet
        };

        tracing::debug!(
            patient = self.record.display_label(),
            screening = %self.screening,
            outcome = %outcome,
            "Numerator evaluated"
        );

        outcome
    }
}

fn classify_screening(record: &PatientRecord) -> ScreeningResult {
    let Some(first) = record.screening.first() else {
        return ScreeningResult::DataCompletenessNotMet;
    };

    if let Some(result) = first.result_value("result") {
        if result.to_lowercase().contains(POSITIVE_SCREEN_PHRASE) {
            ScreeningResult::Positive
        } else {
            ScreeningResult::Negative
        }
    } else if first.result_value("negationReason").is_some() {
        ScreeningResult::IncompleteMedicalReason
    } else if first.result.is_empty() {
        ScreeningResult::NotDocumented
    } else {
        ScreeningResult::Unclassified
    }
}
