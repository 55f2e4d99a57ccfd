//! Single-pass classification fold over the data rows.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::debug;

use fieldpay_map::ColumnMap;
use fieldpay_model::{DisqualifiedRecord, Field, SourceKey};

use crate::classify::{RowOutcome, classify_row};
use crate::normalize::{normalize_phone, parse_money_checked, parse_money_vnd};
use crate::warnings::RowWarning;

/// Everything one pass over the sheet accumulates.
///
/// `groups` holds absolute sheet-row indices per source, in discovery order;
/// that order is what the per-vendor exports follow. The BTreeMap counters
/// iterate in key order for deterministic reporting.
#[derive(Debug, Default, Clone)]
pub struct Tallies {
    pub groups: IndexMap<SourceKey, Vec<usize>>,
    pub counts_by_src: BTreeMap<SourceKey, u64>,
    pub incentive_sum_by_src: BTreeMap<SourceKey, i64>,
    pub total_complete: u64,
    pub total_evoucher_sum: i64,
    pub total_referral_sum: i64,
    pub skipped_blank: u64,
    pub incomplete: u64,
    pub disqualified: Vec<DisqualifiedRecord>,
    pub warnings: Vec<RowWarning>,
}

impl Tallies {
    pub fn group_rows(&self, key: &SourceKey) -> &[usize] {
        self.groups.get(key).map_or(&[], Vec::as_slice)
    }

    /// Rows that fell into each outcome, for the partition check and the
    /// run summary.
    pub fn classified_total(&self) -> u64 {
        self.total_complete + self.skipped_blank + self.incomplete + self.disqualified.len() as u64
    }

    fn absorb(&mut self, index: usize, row: &[String], columns: &ColumnMap) {
        match classify_row(row, columns) {
            RowOutcome::SkippedBlank => self.skipped_blank += 1,
            RowOutcome::Incomplete => self.incomplete += 1,
            RowOutcome::Disqualified(record) => self.disqualified.push(record),
            RowOutcome::Counted(source) => self.count_row(index, row, columns, source),
        }
    }

    fn count_row(&mut self, index: usize, row: &[String], columns: &ColumnMap, source: SourceKey) {
        let complete_incentive = parse_money_vnd(columns.cell(row, Field::CompleteIncentive));
        let referral_incentive = parse_money_vnd(columns.cell(row, Field::ReferralIncentive));

        self.total_complete += 1;
        *self.counts_by_src.entry(source.clone()).or_default() += 1;

        // the referral group is paid from its own incentive column,
        // every other group from the complete incentive
        let incentive_field = if source.is_referral() {
            Field::ReferralIncentive
        } else {
            Field::CompleteIncentive
        };
        let bucket_incentive = if source.is_referral() {
            referral_incentive
        } else {
            complete_incentive
        };
        *self
            .incentive_sum_by_src
            .entry(source.clone())
            .or_default() += bucket_incentive;

        if source.is_evoucher() {
            self.total_evoucher_sum += complete_incentive;
        }
        if source.is_referral() {
            self.total_referral_sum += referral_incentive;

            let raw_phone = columns.cell(row, Field::Ref);
            if !raw_phone.trim().is_empty() && normalize_phone(raw_phone).is_empty() {
                self.warnings.push(RowWarning {
                    row: index + 1,
                    field: Field::Ref,
                    value: raw_phone.trim().to_string(),
                    message: "referrer has no digits; excluded from payouts".to_string(),
                });
            }
        }

        self.note_degraded_amount(index, row, columns, incentive_field);
        self.groups.entry(source).or_default().push(index);
    }

    fn note_degraded_amount(
        &mut self,
        index: usize,
        row: &[String],
        columns: &ColumnMap,
        field: Field,
    ) {
        let raw = columns.cell(row, field);
        if parse_money_checked(raw).is_none() {
            self.warnings.push(RowWarning {
                row: index + 1,
                field,
                value: raw.trim().to_string(),
                message: "amount did not parse; treated as 0".to_string(),
            });
        }
    }
}

/// Classify every row after the header and fold the outcomes into
/// [`Tallies`]. Row indices are absolute sheet indices, so warnings and
/// group members can be traced back to the file.
pub fn process_rows(rows: &[Vec<String>], header_row: usize, columns: &ColumnMap) -> Tallies {
    let tallies = rows
        .iter()
        .enumerate()
        .skip(header_row + 1)
        .fold(Tallies::default(), |mut tallies, (index, row)| {
            tallies.absorb(index, row, columns);
            tallies
        });
    debug!(
        counted = tallies.total_complete,
        skipped = tallies.skipped_blank,
        incomplete = tallies.incomplete,
        disqualified = tallies.disqualified.len(),
        groups = tallies.groups.len(),
        "classified data rows"
    );
    tallies
}
