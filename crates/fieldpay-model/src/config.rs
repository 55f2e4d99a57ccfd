use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Field, SourceKey};

/// Configured human label for each logical field.
///
/// Labels are matched against header cells with the fuzzy rules in
/// `fieldpay-map`; the defaults mirror the sheet template the panel team
/// distributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSpec {
    pub src: String,
    pub response_id: String,
    pub db_mobile: String,
    pub complete_incentive: String,
    pub pprid: String,
    #[serde(rename = "ref")]
    pub referrer: String,
    pub referral_incentive: String,
    pub status: String,
}

impl Default for HeaderSpec {
    fn default() -> Self {
        Self {
            src: "src - source".to_string(),
            response_id: "Response ID".to_string(),
            db_mobile: "db.mobile".to_string(),
            complete_incentive: "complete incentive".to_string(),
            pprid: "pprid - panel provider's respondent id".to_string(),
            referrer: "ref - referrer".to_string(),
            referral_incentive: "referral incentive".to_string(),
            status: "Status".to_string(),
        }
    }
}

impl HeaderSpec {
    pub fn label(&self, field: Field) -> &str {
        match field {
            Field::Src => &self.src,
            Field::ResponseId => &self.response_id,
            Field::DbMobile => &self.db_mobile,
            Field::CompleteIncentive => &self.complete_incentive,
            Field::Pprid => &self.pprid,
            Field::Ref => &self.referrer,
            Field::ReferralIncentive => &self.referral_incentive,
            Field::Status => &self.status,
        }
    }
}

/// Per-run processing configuration.
///
/// `vendor_cpis` maps canonical source keys to a per-complete rate in USD;
/// keys are canonicalized on deserialization, so `PP_Fulcrum` in a config
/// file lands on the same entry as `pp_fulcrum`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project_code: String,
    pub vendor_cpis: BTreeMap<SourceKey, f64>,
    pub headers: HeaderSpec,
}

impl Config {
    pub fn cpi_for(&self, key: &SourceKey) -> Option<f64> {
        self.vendor_cpis.get(key).copied()
    }
}
