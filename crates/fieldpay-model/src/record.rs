use serde::{Deserialize, Serialize};

/// Raw cells captured for a disqualified panel-provider respondent.
///
/// Values are taken verbatim from the sheet (no trimming) so the report
/// shows exactly what the vendor submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisqualifiedRecord {
    pub pprid: String,
    pub response_id: String,
    pub status: String,
}
