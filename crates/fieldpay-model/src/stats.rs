use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SourceKey;

/// Run-level summary statistics.
///
/// Monetary sums are integer VND; vendor costs are USD (`count x cpi`).
/// Map keys iterate in lexicographic order, which is also the order the
/// CLI breakdown table prints them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewStats {
    pub total_complete: u64,
    pub total_evoucher_sum: i64,
    pub total_referral_sum: i64,
    pub counts_by_src: BTreeMap<SourceKey, u64>,
    pub incentive_sum_by_src: BTreeMap<SourceKey, i64>,
    pub vendor_costs: BTreeMap<SourceKey, f64>,
}

impl PreviewStats {
    /// Total vendor spend across all panel providers, in USD.
    pub fn total_vendor_cost(&self) -> f64 {
        self.vendor_costs.values().sum()
    }
}
