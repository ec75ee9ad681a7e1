//! Denominator (population eligibility) evaluation

use super::age::{parse_clinical_date, AgeBreakdown};
use super::codes::{extract_procedure_code, is_qualifying_code};
use crate::domain::{EligibilityOutcome, MeasureError, PatientRecord, Result};

/// Code label read for procedure codes
///
/// HCPCS G-codes are matched only when rendered under this label; a
/// separate `HCPCS` label is not consulted.
const PROCEDURE_CODE_SYSTEM: &str = "CPT";

/// Time key holding the start of an encounter's relevant period
const ENCOUNTER_START_KEY: &str = "relevantPeriodStart";

/// Evaluates whether a patient belongs to the measure population
///
/// A patient is eligible when the age at the first encounter is inside the
/// measure window and at least one encounter carries a qualifying
/// procedure code.
///
/// # Examples
///
/// ```
/// use depscreen::core::measure::DenominatorDeterminer;
///
/// let json = r#"{
///     "patientDetails": {"dateOfBirth": "2015-01-01"},
///     "encounters": [{
///         "description": "Office Visit",
///         "codes": {"CPT": "90834-HD"},
///         "time": {"relevantPeriodStart": "2024-01-01"}
///     }]
/// }"#;
///
/// let outcome = DenominatorDeterminer::from_json(json)?.check_denominator()?;
/// assert!(outcome.eligible);
/// # Ok::<(), depscreen::domain::MeasureError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DenominatorDeterminer {
    record: PatientRecord,
}

impl DenominatorDeterminer {
    /// Creates a determiner for an already parsed record
    pub fn new(record: PatientRecord) -> Self {
        Self { record }
    }

    /// Parses the record from JSON and creates a determiner
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::Parse`] for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(PatientRecord::from_json(json)?))
    }

    /// Age at the start of the first encounter
    ///
    /// # Errors
    ///
    /// [`MeasureError::MissingData`] when there is no encounter, no encounter
    /// start, or no date of birth; [`MeasureError::InvalidDate`] when either
    /// date cannot be parsed.
    pub fn age_at_first_encounter(&self) -> Result<AgeBreakdown> {
        let encounter = self.record.encounters.first().ok_or_else(|| {
            MeasureError::MissingData("patient has no encounters".to_string())
        })?;
        let start = encounter.time_value(ENCOUNTER_START_KEY).ok_or_else(|| {
            MeasureError::MissingData(format!(
                "first encounter has no {ENCOUNTER_START_KEY}"
            ))
        })?;
        let birth = self.record.birth_date().ok_or_else(|| {
            MeasureError::MissingData("patient has no dateOfBirth".to_string())
        })?;

        Ok(AgeBreakdown::between(
            parse_clinical_date(birth)?,
            parse_clinical_date(start)?,
        ))
    }

    /// Whether the age at first encounter is inside the measure window
    pub fn check_age_criteria(&self) -> Result<bool> {
        let age = self.age_at_first_encounter()?;
        tracing::trace!(
            years = age.years,
            months = age.months,
            days = age.days,
            "Computed age at first encounter"
        );
        Ok(age.is_within_measure_window())
    }

    /// Whether any encounter carries a qualifying procedure code
    pub fn check_procedure_criteria(&self) -> bool {
        self.record
            .encounters
            .iter()
            .filter_map(|encounter| encounter.code(PROCEDURE_CODE_SYSTEM))
            .filter_map(extract_procedure_code)
            .any(is_qualifying_code)
    }

    /// Evaluates both criteria and hands back the record with the verdict
    ///
    /// Missing or unreadable dates surface as errors, never as an
    /// ineligible outcome.
    pub fn check_denominator(self) -> Result<EligibilityOutcome> {
        let age_eligible = self.check_age_criteria()?;
        let procedure_eligible = self.check_procedure_criteria();

        tracing::debug!(
            patient = self.record.display_label(),
            age_eligible,
            procedure_eligible,
            "Denominator evaluated"
        );

        Ok(EligibilityOutcome {
            eligible: age_eligible && procedure_eligible,
            patient_data: self.record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClinicalSection, QdmDetail};

    fn encounter(cpt: &str, start: &str) -> QdmDetail {
        QdmDetail::new("Encounter, Performed")
            .with_code("CPT", cpt)
            .with_time("relevantPeriodStart", start)
    }

    fn patient(dob: &str, encounters: Vec<QdmDetail>) -> PatientRecord {
        PatientRecord::builder()
            .date_of_birth(dob)
            .section(ClinicalSection::Encounters, encounters)
            .build()
    }

    #[test]
    fn test_documented_example_is_eligible() {
        let record = patient("2015-01-01", vec![encounter("90834-HD", "2024-01-01")]);
        let outcome = DenominatorDeterminer::new(record.clone()).check_denominator().unwrap();

        assert!(outcome.eligible);
        assert_eq!(outcome.patient_data, record);
    }

    #[test]
    fn test_no_qualifying_code_is_ineligible() {
        let record = patient("2015-01-01", vec![encounter("99211", "2024-01-01")]);
        let outcome = DenominatorDeterminer::new(record).check_denominator().unwrap();
        assert!(!outcome.eligible);
    }

    #[test]
    fn test_any_encounter_may_qualify() {
        let record = patient(
            "2015-01-01",
            vec![
                encounter("99211", "2024-01-01"),
                QdmDetail::new("no codes"),
                encounter("G0444 - Annual screening", "2024-03-01"),
            ],
        );
        assert!(DenominatorDeterminer::new(record).check_procedure_criteria());
    }

    #[test]
    fn test_only_cpt_label_is_consulted() {
        let hcpcs_label = QdmDetail::new("Encounter, Performed")
            .with_code("HCPCS", "G0444")
            .with_time("relevantPeriodStart", "2024-01-01");
        let record = patient("2015-01-01", vec![hcpcs_label]);
        assert!(!DenominatorDeterminer::new(record).check_denominator().unwrap().eligible);

        let cpt_label = patient("2015-01-01", vec![encounter("G0444", "2024-01-01")]);
        assert!(DenominatorDeterminer::new(cpt_label).check_denominator().unwrap().eligible);
    }

    #[test]
    fn test_exactly_twelve_years_is_excluded() {
        let record = patient("2012-01-01", vec![encounter("90834", "2024-01-01")]);
        let determiner = DenominatorDeterminer::new(record);

        assert!(!determiner.check_age_criteria().unwrap());
        assert!(!determiner.check_denominator().unwrap().eligible);
    }

    #[test]
    fn test_age_uses_first_encounter_only() {
        let record = patient(
            "2012-06-01",
            vec![encounter("99211", "2020-01-01"), encounter("90834", "2030-01-01")],
        );
        assert!(DenominatorDeterminer::new(record).check_age_criteria().unwrap());
    }

    #[test]
    fn test_no_encounters_is_missing_data() {
        let record = patient("2015-01-01", Vec::new());
        let result = DenominatorDeterminer::new(record).check_denominator();
        assert!(matches!(result, Err(MeasureError::MissingData(_))));
    }

    #[test]
    fn test_missing_encounter_start_is_missing_data() {
        let record = patient("2015-01-01", vec![QdmDetail::new("Visit").with_code("CPT", "90834")]);
        let result = DenominatorDeterminer::new(record).check_age_criteria();
        assert!(matches!(result, Err(MeasureError::MissingData(_))));
    }

    #[test]
    fn test_missing_birth_date_is_missing_data() {
        let record = PatientRecord::builder()
            .row(ClinicalSection::Encounters, encounter("90834", "2024-01-01"))
            .build();
        let result = DenominatorDeterminer::new(record).check_denominator();
        assert!(matches!(result, Err(MeasureError::MissingData(_))));
    }

    #[test]
    fn test_unparseable_date_is_invalid() {
        let record = patient("not a date", vec![encounter("90834", "2024-01-01")]);
        let result = DenominatorDeterminer::new(record).check_denominator();
        assert!(matches!(result, Err(MeasureError::InvalidDate { .. })));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            DenominatorDeterminer::from_json("[1, 2"),
            Err(MeasureError::Parse(_))
        ));
    }
}
