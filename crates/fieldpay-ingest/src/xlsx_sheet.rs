use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, Sheets, open_workbook_auto};
use tracing::debug;

use crate::sheet::RawSheet;

/// Survey exports put the payable rows on a tab with this name; when the
/// workbook has one it wins over the first sheet.
const PREFERRED_SHEET: &str = "Completed";

/// Read one worksheet of an Excel/ODS workbook as a raw string matrix.
pub fn read_workbook_sheet(path: &Path) -> Result<RawSheet> {
    let mut workbook: Sheets<_> =
        open_workbook_auto(path).with_context(|| format!("open workbook: {}", path.display()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(first) = sheet_names.first() else {
        bail!("workbook has no sheets: {}", path.display());
    };
    let target = sheet_names
        .iter()
        .find(|name| name.as_str() == PREFERRED_SHEET)
        .unwrap_or(first)
        .clone();
    debug!(sheet = %target, "reading worksheet");

    let range = workbook
        .worksheet_range(&target)
        .with_context(|| format!("read sheet '{}': {}", target, path.display()))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(RawSheet::from_rows(rows))
}

/// Stringify a cell the way it displays: whole floats lose the trailing
/// `.0`, booleans become TRUE/FALSE, empties become "".
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
