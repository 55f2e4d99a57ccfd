//! Classification, normalization, and aggregation over raw sheet rows.
//!
//! One pass classifies every data row into exactly one outcome and folds the
//! counted rows into per-source groups and monetary tallies; the aggregators
//! then derive referrer payouts and vendor costs from that state without
//! touching the sheet again.

pub mod accumulate;
pub mod aggregate;
pub mod classify;
pub mod normalize;
pub mod stats;
pub mod warnings;

pub use accumulate::{Tallies, process_rows};
pub use aggregate::{referral_phone_totals, vendor_costs};
pub use classify::{RowOutcome, classify_row};
pub use normalize::{normalize_phone, normalize_status, parse_money_checked, parse_money_vnd};
pub use stats::preview_stats;
pub use warnings::RowWarning;
