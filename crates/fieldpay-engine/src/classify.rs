use fieldpay_map::ColumnMap;
use fieldpay_model::{DisqualifiedRecord, Field, SourceKey};

use crate::normalize::normalize_status;

/// Classification of one data row. Every row gets exactly one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Every cell in the row is blank after trimming.
    SkippedBlank,
    /// A fulcrum respondent the vendor marked disqualified; captured for
    /// the disqualification report and excluded from all counts.
    Disqualified(DisqualifiedRecord),
    /// Present but not in a payable status.
    Incomplete,
    /// A payable complete, bucketed under its canonical source.
    Counted(SourceKey),
}

/// Apply the classification ladder in its fixed order: blank check first,
/// then the fulcrum disqualification rule, then status completeness.
pub fn classify_row(row: &[String], columns: &ColumnMap) -> RowOutcome {
    if row.iter().all(|cell| cell.trim().is_empty()) {
        return RowOutcome::SkippedBlank;
    }

    let source = SourceKey::from_raw(columns.cell(row, Field::Src));

    if source == SourceKey::fulcrum()
        && columns.is_mapped(Field::Status)
        && normalize_status(columns.cell(row, Field::Status)) == "disqualified"
    {
        // report cells verbatim, exactly as the vendor submitted them
        return RowOutcome::Disqualified(DisqualifiedRecord {
            pprid: columns.cell(row, Field::Pprid).to_string(),
            response_id: columns.cell(row, Field::ResponseId).to_string(),
            status: columns.cell(row, Field::Status).to_string(),
        });
    }

    if !row_is_complete(row, columns) {
        return RowOutcome::Incomplete;
    }

    RowOutcome::Counted(source)
}

/// With no status column every row counts as complete; otherwise the
/// normalized status must be `complete` or `completed`.
fn row_is_complete(row: &[String], columns: &ColumnMap) -> bool {
    if !columns.is_mapped(Field::Status) {
        return true;
    }
    matches!(
        normalize_status(columns.cell(row, Field::Status)).as_str(),
        "complete" | "completed"
    )
}
