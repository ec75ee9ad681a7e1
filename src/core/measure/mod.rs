//! Depression screening measure logic
//!
//! Two stages run per patient:
//!
//! 1. [`DenominatorDeterminer`] decides population membership from the
//!    age at first encounter and the encounter procedure codes.
//! 2. [`NumeratorDeterminer`] assigns each eligible patient exactly one
//!    [`NumeratorOutcome`] through an ordered first-match rule chain.
//!
//! [`NumeratorOutcome`]: crate::domain::NumeratorOutcome

pub mod age;
pub mod codes;
pub mod denominator;
pub mod numerator;

pub use age::{parse_clinical_date, AgeBreakdown};
pub use codes::{extract_procedure_code, is_qualifying_code, QUALIFYING_PROCEDURE_CODES};
pub use denominator::DenominatorDeterminer;
pub use numerator::NumeratorDeterminer;

use crate::domain::{NumeratorOutcome, PatientRecord, Result};

/// Outcome of running both stages on one patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Eligible, with the assigned numerator outcome
    Eligible {
        record: PatientRecord,
        outcome: NumeratorOutcome,
    },
    /// Outside the measure population
    Ineligible { record: PatientRecord },
}

/// Run the denominator and, for eligible patients, the numerator
pub fn evaluate_patient(record: PatientRecord) -> Result<Evaluation> {
    let eligibility = DenominatorDeterminer::new(record).check_denominator()?;
    if !eligibility.eligible {
        return Ok(Evaluation::Ineligible {
            record: eligibility.patient_data,
        });
    }

    let outcome = NumeratorDeterminer::new(&eligibility.patient_data).check_numerator();
    Ok(Evaluation::Eligible {
        record: eligibility.patient_data,
        outcome,
    })
}
