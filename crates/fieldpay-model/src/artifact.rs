use serde::{Deserialize, Serialize};

/// Output container for an artifact.
///
/// `Tabular` artifacts are worksheets rendered by the packaging layer;
/// `Text` and `Csv` artifacts encode their own payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Tabular,
    Text,
    Csv,
}

impl ArtifactKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Tabular => "xlsx",
            ArtifactKind::Text => "txt",
            ArtifactKind::Csv => "csv",
        }
    }
}

/// One planned output file.
///
/// `name` is the base name without extension; it is a pure function of the
/// input rows and config, never of the clock. Text artifacts carry their
/// payload as single-cell rows, one per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub name: String,
    pub kind: ArtifactKind,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportArtifact {
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.kind.extension())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Payload bytes for self-encoded kinds; `None` for worksheets.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        match self.kind {
            ArtifactKind::Tabular => None,
            ArtifactKind::Text => {
                let lines: Vec<String> = self.rows.iter().map(|row| row.concat()).collect();
                Some(lines.join("\n").into_bytes())
            }
            ArtifactKind::Csv => Some(self.csv_bytes()),
        }
    }

    /// UTF-8 with a leading BOM so spreadsheet tools open it as Unicode.
    /// Lines are LF-joined with no trailing newline.
    fn csv_bytes(&self) -> Vec<u8> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(csv_line(&self.header));
        lines.extend(self.rows.iter().map(|row| csv_line(row)));
        let mut bytes = "\u{feff}".as_bytes().to_vec();
        bytes.extend_from_slice(lines.join("\n").as_bytes());
        bytes
    }
}

fn csv_line(cells: &[String]) -> String {
    let encoded: Vec<String> = cells.iter().map(|cell| csv_field(cell)).collect();
    encoded.join(",")
}

/// A field is quoted only when it contains a comma, quote, or newline;
/// embedded quotes are doubled.
fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
