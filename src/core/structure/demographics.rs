//! Demographics from the document header block

use crate::core::markup::{compile, element_text};
use crate::domain::patient::Demographics;
use scraper::{Html, Selector};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy)]
enum HeaderField {
    Name,
    Sex,
    DateOfBirth,
    DateOfExpiration,
    Race,
    Ethnicity,
    InsuranceProvider,
    Id,
    Address,
    Contact,
}

/// Header cell positions: (field, header row, cell column), both 1-based
const HEADER_LAYOUT: [(HeaderField, usize, usize); 10] = [
    (HeaderField::Name, 1, 2),
    (HeaderField::Sex, 1, 4),
    (HeaderField::DateOfBirth, 2, 2),
    (HeaderField::DateOfExpiration, 2, 4),
    (HeaderField::Race, 3, 2),
    (HeaderField::Ethnicity, 3, 4),
    (HeaderField::InsuranceProvider, 4, 2),
    (HeaderField::Id, 4, 4),
    (HeaderField::Address, 5, 2),
    (HeaderField::Contact, 5, 4),
];

static HEADER_SELECTORS: LazyLock<Vec<(HeaderField, Selector)>> = LazyLock::new(|| {
    HEADER_LAYOUT
        .iter()
        .map(|(field, row, column)| {
            let css = format!(".div-head-row:nth-child({row}) > div:nth-child({column})");
            (*field, compile(&css))
        })
        .collect()
});

/// Read demographics from the first matching header cells of a document
///
/// Cell text is trimmed. A cell that is not present leaves its field unset.
pub fn extract_demographics(html: &Html) -> Demographics {
    let mut demographics = Demographics::default();

    for (field, selector) in HEADER_SELECTORS.iter() {
        if let Some(cell) = html.select(selector).next() {
            assign(&mut demographics, *field, element_text(cell).trim().to_string());
        }
    }

    demographics
}

fn assign(demographics: &mut Demographics, field: HeaderField, value: String) {
    let slot = match field {
        HeaderField::Name => &mut demographics.name,
        HeaderField::Sex => &mut demographics.sex,
        HeaderField::DateOfBirth => &mut demographics.date_of_birth,
        HeaderField::DateOfExpiration => &mut demographics.date_of_expiration,
        HeaderField::Race => &mut demographics.race,
        HeaderField::Ethnicity => &mut demographics.ethnicity,
        HeaderField::InsuranceProvider => &mut demographics.insurance_provider,
        HeaderField::Id => &mut demographics.id,
        HeaderField::Address => &mut demographics.address,
        HeaderField::Contact => &mut demographics.contact,
    };
    *slot = Some(value);
}
