//! XML measure report

use crate::core::pipeline::ProcessingSummary;
use crate::domain::{MeasureError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const ROOT: &str = "MeasureReport";

fn report_error(e: impl Display) -> MeasureError {
    MeasureError::Report(format!("Failed to write XML report: {e}"))
}

/// Write the population counts and outcome counts of a run as XML
///
/// Outcomes appear in rule-chain order; outcomes no patient received are
/// left out.
pub fn write_xml_report<W: Write>(summary: &ProcessingSummary, writer: W) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(report_error)?;

    let eligible = summary.eligible_count().to_string();
    let ineligible = summary.ineligible_count().to_string();
    let mut root = BytesStart::new(ROOT);
    root.push_attribute(("EligiblePopulation", eligible.as_str()));
    root.push_attribute(("IneligiblePopulation", ineligible.as_str()));
    xml.write_event(Event::Start(root)).map_err(report_error)?;

    xml.write_event(Event::Start(BytesStart::new("Results")))
        .map_err(report_error)?;
    for (outcome, count) in &summary.results {
        let count = count.to_string();
        let mut result = BytesStart::new("Result");
        result.push_attribute(("key", outcome.code()));
        result.push_attribute(("count", count.as_str()));
        xml.write_event(Event::Empty(result)).map_err(report_error)?;
    }
    xml.write_event(Event::End(BytesEnd::new("Results")))
        .map_err(report_error)?;

    xml.write_event(Event::End(BytesEnd::new(ROOT)))
        .map_err(report_error)?;

    xml.into_inner().flush().map_err(report_error)?;
    Ok(())
}

/// Write the XML report to `path`, creating parent directories
pub fn write_xml_report_file(summary: &ProcessingSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)
        .map_err(|e| MeasureError::Io(format!("Failed to create {}: {e}", path.display())))?;
    write_xml_report(summary, BufWriter::new(file))?;

    tracing::info!(path = %path.display(), "Wrote measure report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measure::Evaluation;
    use crate::domain::{NumeratorOutcome, PatientRecord};

    fn render(summary: &ProcessingSummary) -> String {
        let mut buffer = Vec::new();
        write_xml_report(summary, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_layout() {
        let mut summary = ProcessingSummary::new();
        summary.record_evaluation(Evaluation::Eligible {
            record: PatientRecord::default(),
            outcome: NumeratorOutcome::DataCompletenessNotMet,
        });
        summary.record_evaluation(Evaluation::Eligible {
            record: PatientRecord::default(),
            outcome: NumeratorOutcome::Bipolar,
        });
        summary.record_evaluation(Evaluation::Ineligible {
            record: PatientRecord::default(),
        });

        let expected = [
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<MeasureReport EligiblePopulation="2" IneligiblePopulation="1">"#,
            r#"  <Results>"#,
            r#"    <Result key="bipolar-G9717" count="1"/>"#,
            r#"    <Result key="dataCompletenessNotMet" count="1"/>"#,
            r#"  </Results>"#,
            r#"</MeasureReport>"#,
        ]
        .join("\n");

        assert_eq!(render(&summary), expected);
    }

    #[test]
    fn test_empty_report() {
        let xml = render(&ProcessingSummary::new());
        assert!(xml.contains(r#"EligiblePopulation="0""#));
        assert!(xml.contains(r#"IneligiblePopulation="0""#));
        assert!(!xml.contains("<Result "));
    }

    #[test]
    fn test_write_report_file_creates_parents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("reports").join("measure.xml");

        write_xml_report_file(&ProcessingSummary::new(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("<?xml"));
    }
}
