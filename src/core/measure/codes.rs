//! Qualifying procedure codes

use std::collections::HashSet;
use std::sync::LazyLock;

/// CPT/HCPCS codes that place an encounter in the measure population
///
/// Matching is exact and case-sensitive.
pub static QUALIFYING_PROCEDURE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "59400", "59510", "59610", "59618", "90791", "90792", "90832", "90834", "90837", "92622",
        "92625", "96105", "96110", "96112", "96116", "96125", "96136", "96138", "96156", "96158",
        "97161", "97162", "97163", "97164", "97165", "97166", "97167", "97802", "97803", "98966",
        "98967", "98968", "99078", "99202", "99203", "99204", "99205", "99212", "99213", "99214",
        "99215", "99304", "99305", "99306", "99307", "99308", "99309", "99310", "99315", "99316",
        "99341", "99342", "99344", "99345", "99347", "99348", "99349", "99350", "99401", "99402",
        "99403", "99424", "99441", "99442", "99443", "99483", "99484", "99491", "99492", "99493",
        "99384", "99385", "99386", "99387", "99394", "99395", "99396", "99397", "G0101", "G0270",
        "G0271", "G0402", "G0438", "G0439", "G0444",
    ]
    .into_iter()
    .collect()
});

/// The procedure code of an encounter code string
///
/// Takes the text before the first `-` and trims it, so
/// `"90834-HD"` yields `"90834"`. Blank results yield `None`.
pub fn extract_procedure_code(code: &str) -> Option<&str> {
    let head = code.split('-').next().unwrap_or_default().trim();
    (!head.is_empty()).then_some(head)
}

/// True when the code is in [`QUALIFYING_PROCEDURE_CODES`]
pub fn is_qualifying_code(code: &str) -> bool {
    QUALIFYING_PROCEDURE_CODES.contains(code)
}
