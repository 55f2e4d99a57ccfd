//! Decodes spreadsheet files into raw string matrices.

pub mod csv_sheet;
pub mod sheet;
pub mod xlsx_sheet;

pub use csv_sheet::read_csv_sheet;
pub use sheet::RawSheet;
pub use xlsx_sheet::read_workbook_sheet;

use std::path::Path;

use anyhow::{Result, bail};

/// Decode a spreadsheet file, dispatching on its extension.
///
/// # Errors
///
/// Fails on unknown extensions and on any decode error from the format
/// readers; the message carries the offending path.
pub fn read_sheet(path: &Path) -> Result<RawSheet> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => read_csv_sheet(path),
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => read_workbook_sheet(path),
        _ => bail!("unsupported spreadsheet format: {}", path.display()),
    }
}
