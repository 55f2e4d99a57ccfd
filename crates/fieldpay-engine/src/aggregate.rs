use std::collections::BTreeMap;

use fieldpay_map::ColumnMap;
use fieldpay_model::{Field, SourceKey};

use crate::accumulate::Tallies;
use crate::normalize::{normalize_phone, parse_money_vnd};

/// Sum referral incentives per normalized referrer phone.
///
/// Rows with both cells blank are placeholders and skipped outright; a row
/// with an amount but no usable phone digits is dropped (there is no one to
/// pay). BTreeMap keys give the ascending phone order the payout files use.
pub fn referral_phone_totals(
    rows: &[Vec<String>],
    columns: &ColumnMap,
    tallies: &Tallies,
) -> BTreeMap<String, i64> {
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for &index in tallies.group_rows(&SourceKey::referral()) {
        let row = &rows[index];
        let raw_phone = columns.cell(row, Field::Ref);
        let raw_amount = columns.cell(row, Field::ReferralIncentive);
        if raw_phone.trim().is_empty() && raw_amount.trim().is_empty() {
            continue;
        }
        let phone = normalize_phone(raw_phone);
        if phone.is_empty() {
            continue;
        }
        *totals.entry(phone).or_default() += parse_money_vnd(raw_amount);
    }
    totals
}

/// Cost per vendor: `count x cpi`, in USD. Vendors with no completes or a
/// non-positive rate are omitted entirely rather than reported as zero.
pub fn vendor_costs(
    counts_by_src: &BTreeMap<SourceKey, u64>,
    vendor_cpis: &BTreeMap<SourceKey, f64>,
) -> BTreeMap<SourceKey, f64> {
    let mut costs = BTreeMap::new();
    for (key, cpi) in vendor_cpis {
        let count = counts_by_src.get(key).copied().unwrap_or(0);
        if count > 0 && *cpi > 0.0 {
            costs.insert(key.clone(), count as f64 * cpi);
        }
    }
    costs
}
