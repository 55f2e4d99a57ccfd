use fieldpay_model::{Config, PreviewStats};

use crate::accumulate::Tallies;
use crate::aggregate::vendor_costs;

/// Assemble the run summary from the accumulated tallies. Pure packaging;
/// all business rules live in the fold and the aggregators.
pub fn preview_stats(tallies: &Tallies, config: &Config) -> PreviewStats {
    PreviewStats {
        total_complete: tallies.total_complete,
        total_evoucher_sum: tallies.total_evoucher_sum,
        total_referral_sum: tallies.total_referral_sum,
        counts_by_src: tallies.counts_by_src.clone(),
        incentive_sum_by_src: tallies.incentive_sum_by_src.clone(),
        vendor_costs: vendor_costs(&tallies.counts_by_src, &config.vendor_cpis),
    }
}
