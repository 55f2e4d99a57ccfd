use std::fmt;

use fieldpay_model::Field;

/// Non-fatal data-quality note attached to a counted row.
///
/// Warnings surface cells that silently degraded during normalization; they
/// never change classification, artifacts, or stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    /// 1-based row number in the source sheet.
    pub row: usize,
    pub field: Field,
    pub value: String,
    pub message: String,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: {} {:?}: {}",
            self.row, self.field, self.value, self.message
        )
    }
}
