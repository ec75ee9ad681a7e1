//! Patient record domain model
//!
//! This module defines [`PatientRecord`], the typed form of one structured
//! clinical document, and the [`ClinicalSection`] identifiers used to
//! address its eleven sections.

use super::errors::MeasureError;
use super::qdm::QdmDetail;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient demographics read from the document header block
///
/// Every field is optional; a cell that is missing from the document is
/// omitted rather than defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_expiration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// The eleven clinical sections of a patient document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClinicalSection {
    Diagnoses,
    Encounters,
    Screening,
    Medication,
    Intervention,
    CharacteristicExpired,
    CharacteristicPayer,
    CharacteristicBirthDate,
    CharacteristicSex,
    CharacteristicRace,
    CharacteristicEthnicity,
}

impl ClinicalSection {
    /// All sections in record order
    pub const ALL: [ClinicalSection; 11] = [
        ClinicalSection::Diagnoses,
        ClinicalSection::Encounters,
        ClinicalSection::Screening,
        ClinicalSection::Medication,
        ClinicalSection::Intervention,
        ClinicalSection::CharacteristicExpired,
        ClinicalSection::CharacteristicPayer,
        ClinicalSection::CharacteristicBirthDate,
        ClinicalSection::CharacteristicSex,
        ClinicalSection::CharacteristicRace,
        ClinicalSection::CharacteristicEthnicity,
    ];

    /// JSON field name of the section
    pub fn field_name(&self) -> &'static str {
        match self {
            ClinicalSection::Diagnoses => "diagnoses",
            ClinicalSection::Encounters => "encounters",
            ClinicalSection::Screening => "screening",
            ClinicalSection::Medication => "medication",
            ClinicalSection::Intervention => "intervention",
            ClinicalSection::CharacteristicExpired => "characteristicExpired",
            ClinicalSection::CharacteristicPayer => "characteristicPayer",
            ClinicalSection::CharacteristicBirthDate => "characteristicBirthDate",
            ClinicalSection::CharacteristicSex => "characteristicSex",
            ClinicalSection::CharacteristicRace => "characteristicRace",
            ClinicalSection::CharacteristicEthnicity => "characteristicEthnicity",
        }
    }
}

impl fmt::Display for ClinicalSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// One structured patient document
///
/// Sections preserve document order. A section absent from the source is
/// an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(rename = "patientDetails", default)]
    pub demographics: Demographics,
    /// Date of birth given at the top level of hand-authored records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub diagnoses: Vec<QdmDetail>,
    #[serde(default)]
    pub encounters: Vec<QdmDetail>,
    #[serde(default)]
    pub screening: Vec<QdmDetail>,
    #[serde(default)]
    pub medication: Vec<QdmDetail>,
    #[serde(default)]
    pub intervention: Vec<QdmDetail>,
    #[serde(default)]
    pub characteristic_expired: Vec<QdmDetail>,
    #[serde(default)]
    pub characteristic_payer: Vec<QdmDetail>,
    #[serde(default)]
    pub characteristic_birth_date: Vec<QdmDetail>,
    #[serde(default)]
    pub characteristic_sex: Vec<QdmDetail>,
    #[serde(default)]
    pub characteristic_race: Vec<QdmDetail>,
    #[serde(default)]
    pub characteristic_ethnicity: Vec<QdmDetail>,
}

impl PatientRecord {
    /// Creates a new builder for constructing a PatientRecord
    pub fn builder() -> PatientRecordBuilder {
        PatientRecordBuilder::default()
    }

    /// Parses a patient record from its JSON form
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::Parse`] if the input is not a JSON object
    /// matching the patient record schema.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MeasureError::Parse(format!("patient record: {e}")))
    }

    /// Serializes the record as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the rows of a section
    pub fn section(&self, section: ClinicalSection) -> &[QdmDetail] {
        match section {
            ClinicalSection::Diagnoses => &self.diagnoses,
            ClinicalSection::Encounters => &self.encounters,
            ClinicalSection::Screening => &self.screening,
            ClinicalSection::Medication => &self.medication,
            ClinicalSection::Intervention => &self.intervention,
            ClinicalSection::CharacteristicExpired => &self.characteristic_expired,
            ClinicalSection::CharacteristicPayer => &self.characteristic_payer,
            ClinicalSection::CharacteristicBirthDate => &self.characteristic_birth_date,
            ClinicalSection::CharacteristicSex => &self.characteristic_sex,
            ClinicalSection::CharacteristicRace => &self.characteristic_race,
            ClinicalSection::CharacteristicEthnicity => &self.characteristic_ethnicity,
        }
    }

    fn section_mut(&mut self, section: ClinicalSection) -> &mut Vec<QdmDetail> {
        match section {
            ClinicalSection::Diagnoses => &mut self.diagnoses,
            ClinicalSection::Encounters => &mut self.encounters,
            ClinicalSection::Screening => &mut self.screening,
            ClinicalSection::Medication => &mut self.medication,
            ClinicalSection::Intervention => &mut self.intervention,
            ClinicalSection::CharacteristicExpired => &mut self.characteristic_expired,
            ClinicalSection::CharacteristicPayer => &mut self.characteristic_payer,
            ClinicalSection::CharacteristicBirthDate => &mut self.characteristic_birth_date,
            ClinicalSection::CharacteristicSex => &mut self.characteristic_sex,
            ClinicalSection::CharacteristicRace => &mut self.characteristic_race,
            ClinicalSection::CharacteristicEthnicity => &mut self.characteristic_ethnicity,
        }
    }

    /// Date of birth, preferring the demographics block
    pub fn birth_date(&self) -> Option<&str> {
        self.demographics
            .date_of_birth
            .as_deref()
            .or(self.date_of_birth.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Label for logs: the patient id, falling back to the name
    pub fn display_label(&self) -> &str {
        self.demographics
            .id
            .as_deref()
            .or(self.demographics.name.as_deref())
            .unwrap_or("<unidentified>")
    }
}

/// Builder for constructing PatientRecord instances
///
/// # Examples
///
/// ```
/// use depscreen::domain::patient::{ClinicalSection, PatientRecord};
/// use depscreen::domain::qdm::QdmDetail;
///
/// let record = PatientRecord::builder()
///     .date_of_birth("2015-01-01")
///     .row(ClinicalSection::Encounters, QdmDetail::new("Office Visit"))
///     .build();
///
/// assert_eq!(record.encounters.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PatientRecordBuilder {
    record: PatientRecord,
}

impl PatientRecordBuilder {
    /// Creates a new PatientRecordBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the demographics block
    pub fn demographics(mut self, demographics: Demographics) -> Self {
        self.record.demographics = demographics;
        self
    }

    /// Sets the patient id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.record.demographics.id = Some(id.into());
        self
    }

    /// Sets the date of birth
    pub fn date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.record.demographics.date_of_birth = Some(date_of_birth.into());
        self
    }

    /// Appends a row to a section
    pub fn row(mut self, section: ClinicalSection, detail: QdmDetail) -> Self {
        self.record.section_mut(section).push(detail);
        self
    }

    /// Replaces the rows of a section
    pub fn section(mut self, section: ClinicalSection, rows: Vec<QdmDetail>) -> Self {
        *self.record.section_mut(section) = rows;
        self
    }

    /// Builds the PatientRecord
    pub fn build(self) -> PatientRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults_missing_sections() {
        let record = PatientRecord::from_json(
            r#"{"patientDetails": {"name": "Jane Doe", "dateOfBirth": "2015-01-01"}}"#,
        )
        .unwrap();

        assert_eq!(record.demographics.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.demographics.date_of_birth.as_deref(), Some("2015-01-01"));
        for section in ClinicalSection::ALL {
            assert!(record.section(section).is_empty(), "{section} should be empty");
        }
    }

    #[test]
    fn test_from_json_malformed() {
        let result = PatientRecord::from_json("{not json");
        assert!(matches!(result, Err(MeasureError::Parse(_))));
    }

    #[test]
    fn test_from_json_wrong_shape() {
        let result = PatientRecord::from_json(r#"{"encounters": "none"}"#);
        assert!(matches!(result, Err(MeasureError::Parse(_))));
    }

    #[test]
    fn test_json_field_names() {
        let record = PatientRecord::builder()
            .row(ClinicalSection::CharacteristicBirthDate, QdmDetail::new("Birthdate"))
            .build();
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("patientDetails").is_some());
        assert_eq!(json["characteristicBirthDate"][0]["description"], "Birthdate");
        for section in ClinicalSection::ALL {
            assert!(json.get(section.field_name()).is_some(), "{section}");
        }
    }

    #[test]
    fn test_demographics_omit_absent_fields() {
        let demographics = Demographics {
            name: Some("John".to_string()),
            ..Demographics::default()
        };
        let json = serde_json::to_string(&demographics).unwrap();
        assert_eq!(json, r#"{"name":"John"}"#);
    }

    #[test]
    fn test_round_trip_is_stable() {
        let record = PatientRecord::builder()
            .id("p-1")
            .date_of_birth("2015-01-01")
            .row(
                ClinicalSection::Encounters,
                QdmDetail::new("Visit").with_code("CPT", "90834-HD"),
            )
            .build();

        let first = record.to_json_pretty().unwrap();
        let second = PatientRecord::from_json(&first).unwrap().to_json_pretty().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_birth_date_falls_back_to_top_level() {
        let record =
            PatientRecord::from_json(r#"{"dateOfBirth": "2015-01-01", "encounters": []}"#).unwrap();
        assert_eq!(record.birth_date(), Some("2015-01-01"));

        let record = PatientRecord::builder().date_of_birth("2014-06-30").build();
        assert_eq!(record.birth_date(), Some("2014-06-30"));

        let record = PatientRecord::builder().date_of_birth("  ").build();
        assert_eq!(record.birth_date(), None);
    }

    #[test]
    fn test_display_label() {
        let record = PatientRecord::builder().id("p-1").build();
        assert_eq!(record.display_label(), "p-1");
        assert_eq!(PatientRecord::default().display_label(), "<unidentified>");
    }
}
