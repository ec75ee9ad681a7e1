//! Row extraction for rendered QDM section tables

use super::keys::{derive_key, parse_label_line};
use crate::core::markup::{
    element_text, first_text, DESCRIPTION_HEADING, HEAD_ROW, LINE_TEXT, TABLE_CELL,
};
use crate::domain::qdm::QdmDetail;
use indexmap::IndexMap;
use scraper::ElementRef;

const CODES_CELL: usize = 1;
const TIME_CELL: usize = 2;
const RESULT_CELL: usize = 3;

/// How the labels of a cell become map keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyStyle {
    /// Trimmed label as-is (code systems such as "CPT")
    Verbatim,
    /// Derived with [`derive_key`]
    Derived,
}

/// Extract one [`QdmDetail`] per row, in input order
///
/// Rows are expected to expose a `.description-heading` and positional
/// `.div-table-cell` elements (index 1 codes, 2 time, 3 result). Missing
/// pieces produce empty fields; no row is ever rejected.
pub fn extract_qdm_details<'a, I>(rows: I) -> Vec<QdmDetail>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    rows.into_iter().map(extract_row).collect()
}

/// Extract a single row
pub fn extract_row(row: ElementRef<'_>) -> QdmDetail {
    let description = first_text(row, &DESCRIPTION_HEADING)
        .map(|text| text.trim().to_string())
        .unwrap_or_default();

    let cells: Vec<ElementRef<'_>> = row.select(&TABLE_CELL).collect();
    let cell_map = |index: usize, style: KeyStyle| {
        cells
            .get(index)
            .map(|cell| cell_entries(*cell, style))
            .unwrap_or_default()
    };

    QdmDetail {
        description,
        codes: cell_map(CODES_CELL, KeyStyle::Verbatim),
        time: cell_map(TIME_CELL, KeyStyle::Derived),
        result: cell_map(RESULT_CELL, KeyStyle::Derived),
    }
}

fn cell_entries(cell: ElementRef<'_>, style: KeyStyle) -> IndexMap<String, String> {
    let mut entries = IndexMap::new();

    for line in cell.select(&HEAD_ROW) {
        let text = match first_text(line, &LINE_TEXT) {
            Some(text) => text,
            None => element_text(line),
        };
        let Some((label, value)) = parse_label_line(&text) else {
            continue;
        };

        let key = match style {
            KeyStyle::Verbatim => label.to_string(),
            KeyStyle::Derived => derive_key(label),
        };
        entries.entry(key).or_insert_with(|| value.to_string());
    }

    entries
}
