// SPDX-FileCopyrightText: 2026 talk-import contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extraction of talk records from the fetched wiki page.
//!
//! The extractor walks every table matched by the configured selector and
//! reads exactly five cells per row by position. It is deliberately
//! permissive: missing cells become empty strings, cell text is taken as-is
//! without trimming, and the only row filter is a non-empty title. Malformed
//! rows are dropped silently, never reported as errors.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::{error::Error, talk::TalkRecord};

/// Selector matching the proposal tables in the reference wiki layout.
pub const DEFAULT_TABLE_SELECTOR: &str = "table.confluenceTable";

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody tr").expect("row selector is valid CSS"));

static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("cell selector is valid CSS"));

/// Parses a user-supplied table selector string.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when the string is not a
/// valid CSS selector.
pub fn parse_table_selector(selector: &str) -> Result<Selector, Error> {
    Selector::parse(selector)
        .map_err(|e| Error::validation(format!("invalid table selector '{selector}': {e}")))
}

/// Extracts talk records from the wiki page HTML.
///
/// Output order is document order: matched tables first, then rows within
/// each table. A row contributes a record iff its title cell text is
/// non-empty; rows failing the filter are dropped without notice. Parsing
/// itself never fails, so this stage reports no errors.
pub fn extract_talks(html: &str, table_selector: &Selector) -> Vec<TalkRecord> {
    let document = Html::parse_document(html);

    let mut talks = Vec::new();
    for table in document.select(table_selector) {
        for row in table.select(&ROW_SELECTOR) {
            if let Some(talk) = read_row(row) {
                talks.push(talk);
            }
        }
    }

    debug!("Extracted {} talk records", talks.len());
    talks
}

/// Reads one table row into a record, honoring the title filter.
///
/// Cells map positionally to title, audience, format, suggested-by, and
/// presenter; a row with fewer than five cells yields empty strings for the
/// missing ones.
fn read_row(row: ElementRef<'_>) -> Option<TalkRecord> {
    let mut cells = row.select(&CELL_SELECTOR).map(cell_text);

    let title = cells.next().unwrap_or_default();
    let audience = cells.next().unwrap_or_default();
    let format = cells.next().unwrap_or_default();
    let suggested_by = cells.next().unwrap_or_default();
    let presenter = cells.next().unwrap_or_default();

    if title.is_empty() {
        return None;
    }

    Some(TalkRecord {
        title,
        audience,
        format,
        suggested_by,
        presenter
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect()
}
