/// Raw spreadsheet contents: rows of cell strings, exactly as decoded.
///
/// Cells keep their original whitespace and casing; normalization belongs to
/// the processing stages. Only the UTF-8 BOM is stripped at decode time.
/// Blank rows are preserved so row indices line up with the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
