use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::sheet::RawSheet;

fn decode_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Read a CSV file as a raw matrix. No row is treated as a header and ragged
/// rows are kept at their decoded width; header location happens downstream.
pub fn read_csv_sheet(path: &Path) -> Result<RawSheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        rows.push(record.iter().map(decode_cell).collect());
    }
    Ok(RawSheet::from_rows(rows))
}
