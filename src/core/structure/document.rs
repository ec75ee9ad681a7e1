//! Parsed patient document

use super::demographics::extract_demographics;
use super::sections::SectionMarkers;
use crate::core::extract::extract_qdm_details;
use crate::core::markup::{first_text, PANEL, PANEL_ROW, PANEL_TITLE};
use crate::domain::patient::{ClinicalSection, Demographics, PatientRecord};
use crate::domain::qdm::QdmDetail;
use crate::domain::{MeasureError, Result};
use scraper::{ElementRef, Html};

/// A parsed rendered QDM document
///
/// Parsing is lenient: only empty input is rejected. Use
/// [`PatientDocument::to_patient_record`] to assemble the typed record.
pub struct PatientDocument {
    html: Html,
}

impl PatientDocument {
    /// Parse a document from HTML text
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::Parse`] when the input is empty or blank.
    pub fn parse(html: &str) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(MeasureError::Parse("document is empty".to_string()));
        }
        Ok(Self {
            html: Html::parse_document(html),
        })
    }

    /// Demographics from the header block
    pub fn demographics(&self) -> Demographics {
        extract_demographics(&self.html)
    }

    /// First panel whose heading contains `marker`
    pub fn find_panel(&self, marker: &str) -> Option<ElementRef<'_>> {
        self.html.select(&PANEL).find(|panel| {
            first_text(*panel, &PANEL_TITLE).is_some_and(|title| title.contains(marker))
        })
    }

    /// Rows of one section; a missing panel yields no rows
    pub fn section_rows(&self, section: ClinicalSection, markers: &SectionMarkers) -> Vec<QdmDetail> {
        let marker = markers.marker(section);
        match self.find_panel(marker) {
            Some(panel) => extract_qdm_details(panel.select(&PANEL_ROW)),
            None => {
                tracing::warn!(
                    section = %section,
                    marker = marker,
                    "No panel found for section"
                );
                Vec::new()
            }
        }
    }

    /// Assemble the full patient record
    pub fn to_patient_record(&self, markers: &SectionMarkers) -> PatientRecord {
        ClinicalSection::ALL
            .into_iter()
            .fold(
                PatientRecord::builder().demographics(self.demographics()),
                |builder, section| builder.section(section, self.section_rows(section, markers)),
            )
            .build()
    }
}

/// Parse and structure one document in a single step
pub fn structure_document(html: &str, markers: &SectionMarkers) -> Result<PatientRecord> {
    Ok(PatientDocument::parse(html)?.to_patient_record(markers))
}
