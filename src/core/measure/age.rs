//! Clinical date parsing and age arithmetic

use crate::domain::{MeasureError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a date or date-time as it appears in clinical documents
///
/// RFC 3339 values keep their local wall-clock time and drop the offset,
/// so they compare like the zone-less dates of birth they are paired
/// with. Plain dates are taken at midnight.
///
/// # Errors
///
/// Returns [`MeasureError::InvalidDate`] when no supported format matches.
pub fn parse_clinical_date(text: &str) -> Result<NaiveDateTime> {
    let value = text.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            return Ok(parsed.and_time(chrono::NaiveTime::MIN));
        }
    }

    Err(MeasureError::InvalidDate {
        value: text.to_string(),
        reason: "unrecognized date format".to_string(),
    })
}

/// Signed elapsed time decomposed into calendar-like units
///
/// Whole days are converted to months using the average Gregorian month
/// (146097 days per 4800 months). Years are whole twelve-month groups,
/// `months` is the remainder, and `days` is the whole-day count modulo
/// 365. Every component truncates toward zero, so an instant before
/// birth produces non-positive components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl AgeBreakdown {
    /// Breakdown of the time from `birth` to `at`
    pub fn between(birth: NaiveDateTime, at: NaiveDateTime) -> Self {
        let whole_days = (at - birth).num_days();
        let total_months = whole_days * 4800 / 146_097;

        Self {
            years: total_months / 12,
            months: total_months % 12,
            days: whole_days % 365,
        }
    }

    /// Age window of the measure population
    ///
    /// Under twelve years, or over twelve years with no remaining months
    /// or days. Exactly twelve whole years is outside the window.
    pub fn is_within_measure_window(&self) -> bool {
        self.years < 12 || (self.years > 12 && self.months < 1 && self.days < 1)
    }
}
