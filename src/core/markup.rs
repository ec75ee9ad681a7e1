//! CSS selectors for rendered QDM documents
//!
//! The rendered documents use a fixed set of CSS classes for their header
//! block, panels, rows, and cells. Selectors are compiled once per process.

use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

pub(crate) fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// A titled clinical section block
pub static PANEL: LazyLock<Selector> = LazyLock::new(|| compile(".panel-default"));

/// Heading text of a panel
pub static PANEL_TITLE: LazyLock<Selector> =
    LazyLock::new(|| compile("div.panel-heading h3.panel-title"));

/// Data rows inside a panel
pub static PANEL_ROW: LazyLock<Selector> =
    LazyLock::new(|| compile(".div-table-body .div-table-row.narr_tr"));

/// Description heading inside a row
pub static DESCRIPTION_HEADING: LazyLock<Selector> =
    LazyLock::new(|| compile(".description-heading"));

/// Positional cells of a row
pub static TABLE_CELL: LazyLock<Selector> = LazyLock::new(|| compile(".div-table-cell"));

/// One "label: value" line inside a cell
pub static HEAD_ROW: LazyLock<Selector> = LazyLock::new(|| compile(".div-head-row"));

/// Text holder of a "label: value" line
pub static LINE_TEXT: LazyLock<Selector> = LazyLock::new(|| compile(".div-table-head--no-border"));

/// Concatenated text content of an element and its descendants
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text content of the first descendant matching `selector`
pub fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(element_text)
}
