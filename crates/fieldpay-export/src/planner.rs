//! Builds the fixed, ordered artifact sequence for one processed sheet.

use fieldpay_engine::{Tallies, normalize_phone, parse_money_vnd, referral_phone_totals};
use fieldpay_map::ColumnMap;
use fieldpay_model::{ArtifactKind, Config, ExportArtifact, Field, SourceKey};
use tracing::debug;

/// Header written to the combined top-up payout file.
const TOPUP_HEADER: [&str; 2] = ["db.mobile", "complete incentive"];
/// Header written to the referrer payout file.
const REFERRER_HEADER: [&str; 2] = ["ref - referrer", "referral incentive"];
/// Header written to every per-vendor respondent-ID list.
const PPRID_HEADER: [&str; 1] = ["pprid - panel provider's respondent id"];
/// Header written to the disqualification report.
const DISQUALIFIED_HEADER: [&str; 4] = [
    "pprid - panel provider's respondent id",
    "Response ID",
    "Status",
    "Reason QC (Formula Placeholder)",
];
/// Header written to the merged payout CSV.
const MERGED_HEADER: [&str; 4] = ["mobile", "incentive", "incentive_type", "response_status"];

const EVOUCHER_TYPE: &str = "Evoucher GOTIT";
const QUALIFIED_STATUS: &str = "Qualified";
const REFERRAL_STATUS: &str = "Referral success";

/// The ordered artifacts of one run plus their report log, one line per
/// artifact. Both are pure functions of the input rows and config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPlan {
    pub artifacts: Vec<ExportArtifact>,
    pub report: Vec<String>,
}

impl ExportPlan {
    fn push_tabular(&mut self, name: String, header: &[&str], rows: Vec<Vec<String>>) {
        let artifact = ExportArtifact {
            name,
            kind: ArtifactKind::Tabular,
            header: header.iter().map(ToString::to_string).collect(),
            rows,
        };
        self.report.push(format!(
            "Generated: {} ({} rows)",
            artifact.file_name(),
            artifact.row_count()
        ));
        self.artifacts.push(artifact);
    }

    fn push_text(&mut self, name: String, content: String) {
        let artifact = ExportArtifact {
            name,
            kind: ArtifactKind::Text,
            header: Vec::new(),
            rows: vec![vec![content]],
        };
        self.report.push(format!("Generated: {}", artifact.file_name()));
        self.artifacts.push(artifact);
    }

    fn push_csv(&mut self, name: String, header: &[&str], rows: Vec<Vec<String>>) {
        let artifact = ExportArtifact {
            name,
            kind: ArtifactKind::Csv,
            header: header.iter().map(ToString::to_string).collect(),
            rows,
        };
        self.report.push(format!("Generated: {}", artifact.file_name()));
        self.artifacts.push(artifact);
    }
}

/// Build every artifact for the run, in the fixed order: top-up payout,
/// referrer payout, per-vendor lists in discovery order, the fulcrum count
/// marker, the disqualification report, then the merged CSV. Steps with no
/// source rows emit neither an artifact nor a report line.
pub fn plan_exports(
    rows: &[Vec<String>],
    columns: &ColumnMap,
    tallies: &Tallies,
    config: &Config,
) -> ExportPlan {
    let mut plan = ExportPlan::default();
    let project_code = config.project_code.trim();

    // rows paid through the top-up file: internal, zalo, referral, in that order
    let topup_rows: Vec<usize> = [
        SourceKey::internal(),
        SourceKey::zalogroup(),
        SourceKey::referral(),
    ]
    .iter()
    .flat_map(|key| tallies.group_rows(key).iter().copied())
    .collect();

    let phone_totals = referral_phone_totals(rows, columns, tallies);

    if !topup_rows.is_empty() {
        let mut data = Vec::new();
        let mut total = 0i64;
        for &index in &topup_rows {
            let row = &rows[index];
            let mobile = columns.cell(row, Field::DbMobile).trim();
            let incentive = columns.cell(row, Field::CompleteIncentive).trim();
            if mobile.is_empty() && incentive.is_empty() {
                continue;
            }
            total += parse_money_vnd(incentive);
            data.push(vec![mobile.to_string(), incentive.to_string()]);
        }
        let base = format!("complete-topup-evoucher_gotit-{}-{}", data.len(), total);
        plan.push_tabular(prefixed(project_code, &base), &TOPUP_HEADER, data);
    }

    if !tallies.group_rows(&SourceKey::referral()).is_empty() {
        let mut data = Vec::new();
        let mut grand_total = 0i64;
        for (phone, total) in &phone_totals {
            grand_total += total;
            data.push(vec![phone.clone(), total.to_string()]);
        }
        let base = format!("referrer-{}-{}", phone_totals.len(), grand_total);
        plan.push_tabular(prefixed(project_code, &base), &REFERRER_HEADER, data);
    }

    for (key, members) in &tallies.groups {
        if key.is_topup() {
            continue;
        }
        let data: Vec<Vec<String>> = members
            .iter()
            .filter_map(|&index| {
                let pprid = columns.cell(&rows[index], Field::Pprid).trim();
                if pprid.is_empty() {
                    None
                } else {
                    Some(vec![pprid.to_string()])
                }
            })
            .collect();
        if data.is_empty() {
            continue;
        }
        let mut base = format!("{}-{}", key.as_str(), data.len());
        if key.is_panel_vendor() {
            if let Some(cpi) = nonzero_cpi(config, key) {
                base.push_str(&format!("-cpi{cpi}"));
            }
        }
        plan.push_tabular(prefixed(project_code, &base), &PPRID_HEADER, data);
    }

    let fulcrum_count = tallies.group_rows(&SourceKey::fulcrum()).len();
    if fulcrum_count > 0 {
        let mut base = format!("fulcrum_{fulcrum_count}");
        if let Some(cpi) = nonzero_cpi(config, &SourceKey::fulcrum()) {
            base.push_str(&format!("-cpi{cpi}"));
        }
        plan.push_text(prefixed(project_code, &base), fulcrum_count.to_string());
    }

    if !tallies.disqualified.is_empty() {
        let data = tallies
            .disqualified
            .iter()
            .map(|record| {
                vec![
                    record.pprid.clone(),
                    record.response_id.clone(),
                    record.status.clone(),
                ]
            })
            .collect();
        // fixed name, never prefixed: downstream QC tooling looks it up verbatim
        plan.push_tabular("Fulcrum_Disqualified".to_string(), &DISQUALIFIED_HEADER, data);
    }

    let mut merged = Vec::new();
    let mut merged_sum = 0i64;
    for &index in &topup_rows {
        let row = &rows[index];
        let phone = normalize_phone(columns.cell(row, Field::DbMobile));
        if phone.is_empty() {
            continue;
        }
        let amount = parse_money_vnd(columns.cell(row, Field::CompleteIncentive));
        merged_sum += amount;
        merged.push(vec![
            phone,
            amount.to_string(),
            EVOUCHER_TYPE.to_string(),
            QUALIFIED_STATUS.to_string(),
        ]);
    }
    for (phone, total) in &phone_totals {
        merged_sum += total;
        merged.push(vec![
            phone.clone(),
            total.to_string(),
            EVOUCHER_TYPE.to_string(),
            REFERRAL_STATUS.to_string(),
        ]);
    }
    if !merged.is_empty() {
        let base = format!("evoucher_gotit-merged-{}-{}", merged.len(), merged_sum);
        plan.push_csv(prefixed(project_code, &base), &MERGED_HEADER, merged);
    }

    debug!(artifacts = plan.artifacts.len(), "export plan built");
    plan
}

/// A non-empty project code prefixes every generated base name.
fn prefixed(project_code: &str, base: &str) -> String {
    if project_code.is_empty() {
        base.to_string()
    } else {
        format!("{project_code}-{base}")
    }
}

/// CPI for the file-name suffix. Zero, missing, and non-finite rates get
/// no suffix; whole rates render without a decimal point (`cpi2`, not
/// `cpi2.0`).
fn nonzero_cpi(config: &Config, key: &SourceKey) -> Option<f64> {
    config
        .cpi_for(key)
        .filter(|cpi| cpi.is_finite() && *cpi != 0.0)
}
