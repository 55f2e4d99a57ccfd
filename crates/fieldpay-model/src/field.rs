use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical spreadsheet fields, in configuration order.
///
/// The declaration order is load-bearing: header resolution evaluates fields
/// in `Field::ALL` order, which makes column assignment deterministic when
/// several cells could match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Src,
    ResponseId,
    DbMobile,
    CompleteIncentive,
    Pprid,
    Ref,
    ReferralIncentive,
    Status,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Src,
        Field::ResponseId,
        Field::DbMobile,
        Field::CompleteIncentive,
        Field::Pprid,
        Field::Ref,
        Field::ReferralIncentive,
        Field::Status,
    ];

    /// Stable key used in config files and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Src => "src",
            Field::ResponseId => "response_id",
            Field::DbMobile => "db_mobile",
            Field::CompleteIncentive => "complete_incentive",
            Field::Pprid => "pprid",
            Field::Ref => "ref",
            Field::ReferralIncentive => "referral_incentive",
            Field::Status => "status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
