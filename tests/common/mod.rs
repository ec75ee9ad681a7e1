//! Rendered clinical summary fixtures shared by the integration tests

#![allow(dead_code)]

/// Panel heading per section, each containing exactly one default marker
pub const DIAGNOSIS_TITLE: &str = "Diagnosis";
pub const ENCOUNTER_TITLE: &str = "EncounterPerformed";
pub const SCREENING_TITLE: &str = "AssessmentPerformed";
pub const MEDICATION_TITLE: &str = "MedicationActive";
pub const INTERVENTION_TITLE: &str = "InterventionOrder";

/// One `label: value` line inside a cell
fn line(text: &str) -> String {
    format!(
        r#"<div class="div-head-row"><div class="div-table-head--no-border">{text}</div></div>"#
    )
}

fn cell(lines: &[&str]) -> String {
    format!(
        r#"<div class="div-table-cell">{}</div>"#,
        lines.iter().map(|l| line(l)).collect::<String>()
    )
}

/// A section table row: description, codes, time, result
pub fn row(description: &str, codes: &[&str], time: &[&str], result: &[&str]) -> String {
    format!(
        r#"<div class="div-table-row narr_tr"><div class="div-table-cell"><span class="description-heading">{description}</span></div>{}{}{}</div>"#,
        cell(codes),
        cell(time),
        cell(result)
    )
}

/// A titled panel holding section rows
pub fn panel(title: &str, rows: &[String]) -> String {
    format!(
        r#"<div class="panel panel-default">
  <div class="panel-heading"><h3 class="panel-title">{title}</h3></div>
  <div class="panel-body">
    <div class="div-table-body">
      <div class="div-table-row div-table-head"><div>Description</div><div>Codes</div><div>Time</div><div>Result</div></div>
      {}
    </div>
  </div>
</div>"#,
        rows.concat()
    )
}

/// Builder for a complete rendered patient summary
#[derive(Debug, Clone)]
pub struct DocumentFixture {
    pub name: String,
    pub sex: String,
    pub date_of_birth: String,
    pub race: String,
    pub ethnicity: String,
    pub id: String,
    pub panels: Vec<String>,
}

impl DocumentFixture {
    pub fn new(name: &str, date_of_birth: &str) -> Self {
        Self {
            name: name.to_string(),
            sex: "F".to_string(),
            date_of_birth: date_of_birth.to_string(),
            race: "White".to_string(),
            ethnicity: "Not Hispanic or Latino".to_string(),
            id: format!("MRN-{}", name.len()),
            panels: Vec::new(),
        }
    }

    pub fn panel(mut self, title: &str, rows: Vec<String>) -> Self {
        self.panels.push(panel(title, &rows));
        self
    }

    /// An encounter with a procedure code and a start time
    pub fn encounter(self, cpt: &str, start: &str) -> Self {
        self.panel(
            ENCOUNTER_TITLE,
            vec![row(
                "Encounter, Performed: Office Visit",
                &[&format!("CPT: {cpt}")],
                &[&format!("Relevant Period Start: {start}")],
                &[],
            )],
        )
    }

    pub fn screening(self, result: &str) -> Self {
        self.panel(
            SCREENING_TITLE,
            vec![row(
                "Assessment, Performed: Depression Screening",
                &["LOINC: 73831-0"],
                &["Relevant Date Time: 2024-02-01T10:00:00"],
                &[&format!("Result: {result}")],
            )],
        )
    }

    pub fn medication(self) -> Self {
        self.panel(
            MEDICATION_TITLE,
            vec![row("Medication, Active: Sertraline", &["RXNORM: 312938"], &[], &[])],
        )
    }

    pub fn intervention(self) -> Self {
        self.panel(
            INTERVENTION_TITLE,
            vec![row("Intervention, Order: Referral", &["SNOMEDCT: 306136006"], &[], &[])],
        )
    }

    pub fn diagnosis(self, description: &str) -> Self {
        self.panel(
            DIAGNOSIS_TITLE,
            vec![row(description, &["ICD10CM: F31.9"], &[], &[])],
        )
    }

    fn header(&self) -> String {
        let head_row = |left_label: &str, left: &str, right_label: &str, right: &str| {
            format!(
                r#"<div class="div-head-row"><div>{left_label}</div><div>{left}</div><div>{right_label}</div><div>{right}</div></div>"#
            )
        };
        [
            head_row("Patient", &self.name, "Sex", &self.sex),
            head_row("Date of birth", &self.date_of_birth, "Date of expiration", ""),
            head_row("Race", &self.race, "Ethnicity", &self.ethnicity),
            head_row("Insurance", "Medicaid", "Patient ID", &self.id),
            head_row("Address", "1 Main St", "Contact", "555-0100"),
        ]
        .concat()
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head><title>Clinical Summary</title></head>
<body>
  <div class="header">{}</div>
  <div class="content">{}</div>
</body>
</html>"#,
            self.header(),
            self.panels.concat()
        )
    }
}
