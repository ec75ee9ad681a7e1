//! Section heading markers
//!
//! Each clinical section is found by the first panel whose heading text
//! contains its marker. [`SectionMarkers`] holds that mapping explicitly.

use crate::domain::patient::ClinicalSection;
use std::collections::BTreeMap;

/// Mapping from clinical section to panel heading marker
///
/// # Examples
///
/// ```
/// use depscreen::core::structure::SectionMarkers;
/// use depscreen::domain::ClinicalSection;
///
/// let markers = SectionMarkers::default();
/// assert_eq!(markers.marker(ClinicalSection::Screening), "AssessmentPerformed");
///
/// let legacy = SectionMarkers::legacy();
/// assert_eq!(legacy.marker(ClinicalSection::Intervention), "Medication");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarkers {
    markers: BTreeMap<ClinicalSection, String>,
}

impl SectionMarkers {
    /// Markers reproducing the historical heading lookup
    ///
    /// Intervention shares the medication marker and sex shares the
    /// birthdate marker, so those sections are filled from the same
    /// panels as their counterparts.
    pub fn legacy() -> Self {
        Self::default()
            .with_marker(ClinicalSection::Intervention, "Medication")
            .with_marker(ClinicalSection::CharacteristicSex, "PatientCharacteristicBirthdate")
    }

    /// Selects legacy or default markers
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy {
            Self::legacy()
        } else {
            Self::default()
        }
    }

    /// Overrides the marker of one section
    pub fn with_marker(mut self, section: ClinicalSection, marker: impl Into<String>) -> Self {
        self.markers.insert(section, marker.into());
        self
    }

    /// Heading marker for a section
    pub fn marker(&self, section: ClinicalSection) -> &str {
        self.markers
            .get(&section)
            .map(String::as_str)
            .unwrap_or_else(|| default_marker(section))
    }

    /// True when no two sections share a marker
    pub fn is_unambiguous(&self) -> bool {
        let mut seen: Vec<&str> = ClinicalSection::ALL.iter().map(|s| self.marker(*s)).collect();
        seen.sort_unstable();
        seen.windows(2).all(|pair| pair[0] != pair[1])
    }
}

impl Default for SectionMarkers {
    fn default() -> Self {
        Self {
            markers: ClinicalSection::ALL
                .into_iter()
                .map(|section| (section, default_marker(section).to_string()))
                .collect(),
        }
    }
}

fn default_marker(section: ClinicalSection) -> &'static str {
    match section {
        ClinicalSection::Diagnoses => "Diagnosis",
        ClinicalSection::Encounters => "Encounter",
        ClinicalSection::Screening => "AssessmentPerformed",
        ClinicalSection::Medication => "Medication",
        ClinicalSection::Intervention => "Intervention",
        ClinicalSection::CharacteristicExpired => "PatientCharacteristicExpired",
        ClinicalSection::CharacteristicPayer => "PatientCharacteristicPayer",
        ClinicalSection::CharacteristicBirthDate => "PatientCharacteristicBirthdate",
        ClinicalSection::CharacteristicSex => "PatientCharacteristicSex",
        ClinicalSection::CharacteristicRace => "PatientCharacteristicRace",
        ClinicalSection::CharacteristicEthnicity => "PatientCharacteristicEthnicity",
    }
}
