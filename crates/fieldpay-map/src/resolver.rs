//! Fuzzy header-row location.

use fieldpay_model::{Field, HeaderSpec, PayrunError, Result};
use tracing::debug;

use crate::columns::ColumnMap;

/// Rows inspected before giving up on finding a header.
pub const HEADER_SCAN_LIMIT: usize = 20;
/// Minimum matched fields for a row to qualify as the header.
pub const HEADER_MATCH_THRESHOLD: usize = 2;

/// A located header row and the column map derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub header_row: usize,
    pub columns: ColumnMap,
}

/// Lower-cases and keeps only ASCII alphanumerics, so "Response ID",
/// "response_id" and "RESPONSE-ID" all compare equal.
pub fn compact_label(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Scan the first [`HEADER_SCAN_LIMIT`] rows for the earliest row where at
/// least [`HEADER_MATCH_THRESHOLD`] configured labels match a cell.
///
/// A cell matches a label when either compacted form contains the other.
/// Fields are resolved in [`Field::ALL`] order and each takes the leftmost
/// matching cell; two fields may land on the same column. Labels that
/// compact to the empty string never match.
///
/// # Errors
///
/// [`PayrunError::HeaderNotFound`] when no row within the window qualifies;
/// the error lists the labels that were searched.
pub fn resolve_headers(rows: &[Vec<String>], headers: &HeaderSpec) -> Result<HeaderMatch> {
    let limit = rows.len().min(HEADER_SCAN_LIMIT);
    for (row_idx, row) in rows.iter().take(limit).enumerate() {
        let cells: Vec<String> = row.iter().map(|cell| compact_label(cell)).collect();
        let mut columns = ColumnMap::default();
        let mut matched = 0usize;

        for field in Field::ALL {
            let label = compact_label(headers.label(field));
            if label.is_empty() {
                continue;
            }
            let hit = cells
                .iter()
                .position(|cell| !cell.is_empty() && bidirectional_match(cell, &label));
            if let Some(index) = hit {
                columns.set(field, index);
                matched += 1;
            }
        }

        if matched >= HEADER_MATCH_THRESHOLD {
            debug!(header_row = row_idx, matched, "header row accepted");
            return Ok(HeaderMatch {
                header_row: row_idx,
                columns,
            });
        }
    }

    Err(PayrunError::HeaderNotFound {
        scanned: limit,
        labels: Field::ALL
            .iter()
            .map(|field| headers.label(*field))
            .filter(|label| !compact_label(label).is_empty())
            .map(ToString::to_string)
            .collect(),
    })
}

fn bidirectional_match(cell: &str, label: &str) -> bool {
    cell.contains(label) || label.contains(cell)
}
