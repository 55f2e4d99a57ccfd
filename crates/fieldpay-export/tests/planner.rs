use fieldpay_engine::{Tallies, process_rows};
use fieldpay_export::{ExportPlan, plan_exports};
use fieldpay_map::resolve_headers;
use fieldpay_model::{ArtifactKind, Config, SourceKey};

const HEADER: &[&str] = &[
    "src - source",
    "Response ID",
    "db.mobile",
    "complete incentive",
    "pprid - panel provider's respondent id",
    "ref - referrer",
    "referral incentive",
    "Status",
];

fn plan_for(config: &Config, raw: &[&[&str]]) -> (ExportPlan, Tallies) {
    let rows: Vec<Vec<String>> = raw
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
    let found = resolve_headers(&rows, &config.headers).expect("header located");
    let tallies = process_rows(&rows, found.header_row, &found.columns);
    let plan = plan_exports(&rows, &found.columns, &tallies, config);
    (plan, tallies)
}

fn config_with_cpis(project_code: &str, cpis: &[(&str, f64)]) -> Config {
    let mut config = Config::default();
    config.project_code = project_code.to_string();
    for (key, cpi) in cpis {
        config.vendor_cpis.insert(SourceKey::from_raw(key), *cpi);
    }
    config
}

#[test]
fn full_run_report_is_ordered_and_named_exactly() {
    let config = config_with_cpis(
        "2501",
        &[("pp_dynata", 1.8), ("pp_fulcrum", 2.0), ("pp_lucid", 0.0)],
    );
    let (plan, _) = plan_for(
        &config,
        &[
            HEADER,
            &["", "r1", "0901111111", "30000", "", "", "", "Complete"],
            &["Zalo Group", "r2", "0902222222", "20000", "", "", "", "complete"],
            &["referral", "r3", "", "", "", "0912 345 678", "10000", "Completed"],
            &["referral", "r4", "", "", "", "0912345678", "15000", "complete"],
            &["pp_dynata", "r5", "", "", "D-001", "", "", "complete"],
            &["pp_dynata", "r6", "", "", " D-002 ", "", "", "complete"],
            &["pp_fulcrum", "r7", "", "", "F-001", "", "", "complete"],
            &["pp_fulcrum", "r8", "", "", "F-002", "", "", "Disqualified"],
            &["", "", "", "", "", "", "", ""],
            &["pp_lucid", "r9", "", "", "", "", "", "complete"],
        ],
    );

    insta::assert_snapshot!(plan.report.join("\n"), @r"
    Generated: 2501-complete-topup-evoucher_gotit-2-50000.xlsx (2 rows)
    Generated: 2501-referrer-1-25000.xlsx (1 rows)
    Generated: 2501-pp_dynata-2-cpi1.8.xlsx (2 rows)
    Generated: 2501-pp_fulcrum-1-cpi2.xlsx (1 rows)
    Generated: 2501-fulcrum_1-cpi2.txt
    Generated: Fulcrum_Disqualified.xlsx (1 rows)
    Generated: 2501-evoucher_gotit-merged-3-75000.csv
    ");

    // pp_lucid had no usable pprid rows, so no artifact carries its name
    assert!(plan.artifacts.iter().all(|a| !a.name.contains("pp_lucid")));
}

#[test]
fn end_to_end_scenario_matches_expected_artifacts() {
    let (plan, tallies) = plan_for(
        &Config::default(),
        &[
            HEADER,
            &["", "r1", "0901111111", "30000", "", "", "", "complete"],
            &["referral", "r2", "", "", "", "0902222222", "10000", "complete"],
            &["referral", "r3", "", "", "", "0902222222", "15000", "complete"],
            &["pp_fulcrum", "r4", "", "", "F001", "", "", "complete"],
        ],
    );

    assert_eq!(tallies.total_evoucher_sum, 30000);
    assert_eq!(tallies.total_referral_sum, 25000);

    let topup = &plan.artifacts[0];
    assert_eq!(topup.name, "complete-topup-evoucher_gotit-1-30000");
    assert_eq!(topup.rows, vec![vec!["0901111111", "30000"]]);

    let referrer = &plan.artifacts[1];
    assert_eq!(referrer.name, "referrer-1-25000");
    assert_eq!(referrer.rows, vec![vec!["0902222222", "25000"]]);

    let vendor = &plan.artifacts[2];
    assert_eq!(vendor.name, "pp_fulcrum-1");
    assert_eq!(vendor.rows, vec![vec!["F001"]]);

    let marker = &plan.artifacts[3];
    assert_eq!(marker.kind, ArtifactKind::Text);
    assert_eq!(marker.file_name(), "fulcrum_1.txt");
    assert_eq!(marker.to_bytes().expect("text payload"), b"1");

    let merged = &plan.artifacts[4];
    assert_eq!(merged.name, "evoucher_gotit-merged-2-55000");
    assert_eq!(plan.artifacts.len(), 5);
}

#[test]
fn replanning_the_same_input_reproduces_every_byte() {
    let config = config_with_cpis("2501", &[("pp_fulcrum", 2.0)]);
    let raw: &[&[&str]] = &[
        HEADER,
        &["", "r1", "0901", "30000", "", "", "", "complete"],
        &["referral", "r2", "", "", "", "0902", "25000", "complete"],
        &["pp_fulcrum", "r3", "", "", "F1", "", "", "complete"],
        &["pp_fulcrum", "r4", "", "", "F2", "", "", "Disqualified"],
    ];

    let (first, _) = plan_for(&config, raw);
    let (second, _) = plan_for(&config, raw);

    // every artifact kind is present, so this compares the full surface:
    // names, headers, row payloads, and report lines
    assert_eq!(first.artifacts.len(), 6);
    assert_eq!(first, second);
    for (a, b) in first.artifacts.iter().zip(&second.artifacts) {
        assert_eq!(a.file_name(), b.file_name());
        assert_eq!(a.to_bytes(), b.to_bytes());
    }
}

#[test]
fn disqualified_rows_reach_only_the_report_artifact() {
    let (plan, tallies) = plan_for(
        &Config::default(),
        &[
            HEADER,
            &["pp_fulcrum", " r77 ", "", "", " F-13 ", "", "", " Disqualified "],
            &["pp_fulcrum", "r78", "", "", "F-14", "", "", "complete"],
        ],
    );

    assert_eq!(tallies.total_complete, 1);
    assert_eq!(
        tallies.counts_by_src.get(&SourceKey::fulcrum()).copied(),
        Some(1)
    );

    let vendor = plan
        .artifacts
        .iter()
        .find(|a| a.name.starts_with("pp_fulcrum"))
        .expect("vendor artifact");
    assert_eq!(vendor.rows, vec![vec!["F-14"]]);

    let disqualified = plan
        .artifacts
        .iter()
        .find(|a| a.name == "Fulcrum_Disqualified")
        .expect("disqualified artifact");
    // raw cells, untrimmed, in original row order
    assert_eq!(
        disqualified.rows,
        vec![vec![" F-13 ", " r77 ", " Disqualified "]]
    );
    assert_eq!(disqualified.header.len(), 4);
}

#[test]
fn project_code_prefixes_everything_except_the_disqualified_report() {
    let config = config_with_cpis("7309", &[]);
    let (plan, _) = plan_for(
        &config,
        &[
            HEADER,
            &["", "r1", "0901", "1000", "", "", "", "complete"],
            &["pp_fulcrum", "r2", "", "", "F1", "", "", "Disqualified"],
        ],
    );

    for artifact in &plan.artifacts {
        if artifact.name == "Fulcrum_Disqualified" {
            continue;
        }
        assert!(
            artifact.name.starts_with("7309-"),
            "unprefixed: {}",
            artifact.name
        );
    }
    assert!(plan.artifacts.iter().any(|a| a.name == "Fulcrum_Disqualified"));
}

#[test]
fn topup_sum_in_the_name_matches_the_payload() {
    let (plan, _) = plan_for(
        &Config::default(),
        &[
            HEADER,
            &["", "r1", "0901", " 50,000 VND ", "", "", "", "complete"],
            &["zalo", "r2", "0902", "25.000", "", "", "", "complete"],
            // blank pair contributes nothing
            &["", "r3", "  ", "", "", "", "", "complete"],
            // mobile without incentive still ships, at zero
            &["", "r4", "0903", "", "", "", "", "complete"],
        ],
    );

    let topup = &plan.artifacts[0];
    assert_eq!(topup.name, "complete-topup-evoucher_gotit-3-75000");
    // cells are emitted as entered, trimmed; the whole internal bucket
    // comes before the zalo bucket
    assert_eq!(topup.rows[0], vec!["0901", "50,000 VND"]);
    assert_eq!(topup.rows[1], vec!["0903", ""]);
    assert_eq!(topup.rows[2], vec!["0902", "25.000"]);
}

#[test]
fn merged_csv_drops_rows_without_phone_digits() {
    let (plan, _) = plan_for(
        &Config::default(),
        &[
            HEADER,
            &["", "r1", "no digits here", "9000", "", "", "", "complete"],
            &["", "r2", "0901", "1000", "", "", "", "complete"],
            &["referral", "r3", "", "", "", "call me", "2000", "complete"],
        ],
    );

    // the undeliverable top-up row still reaches the top-up file as entered
    let topup = &plan.artifacts[0];
    assert_eq!(topup.row_count(), 2);
    assert_eq!(topup.rows[0], vec!["no digits here", "9000"]);

    let merged = plan
        .artifacts
        .iter()
        .find(|a| a.kind == ArtifactKind::Csv)
        .expect("merged csv");
    assert_eq!(merged.name, "evoucher_gotit-merged-1-1000");
    assert_eq!(merged.rows, vec![vec!["0901", "1000", "Evoucher GOTIT", "Qualified"]]);

    let bytes = merged.to_bytes().expect("csv payload");
    let text = String::from_utf8(bytes).expect("utf-8");
    assert!(text.starts_with('\u{feff}'));
    assert!(!text.ends_with('\n'));
}

#[test]
fn cpi_suffix_requires_panel_prefix_and_nonzero_rate() {
    let config = config_with_cpis("", &[("facebook", 3.0), ("pp_cint", 0.0)]);
    let (plan, _) = plan_for(
        &config,
        &[
            HEADER,
            &["facebook", "r1", "", "", "FB1", "", "", "complete"],
            &["pp_cint", "r2", "", "", "C1", "", "", "complete"],
        ],
    );

    let names: Vec<&str> = plan.artifacts.iter().map(|a| a.name.as_str()).collect();
    assert!(names.contains(&"facebook-1"), "{names:?}");
    assert!(names.contains(&"pp_cint-1"), "{names:?}");
}

#[test]
fn cpi_suffix_ignores_non_finite_rates() {
    // `--cpi pp_fulcrum=NaN` parses as an f64, so the rate can reach here
    let config = config_with_cpis("", &[("pp_fulcrum", f64::NAN)]);
    let (plan, _) = plan_for(
        &config,
        &[HEADER, &["pp_fulcrum", "r1", "", "", "F1", "", "", "complete"]],
    );

    let names: Vec<&str> = plan.artifacts.iter().map(|a| a.name.as_str()).collect();
    assert!(names.contains(&"pp_fulcrum-1"), "{names:?}");
    assert!(names.contains(&"fulcrum_1"), "{names:?}");
    assert!(names.iter().all(|name| !name.contains("cpi")), "{names:?}");
}

#[test]
fn empty_groups_produce_no_artifacts_at_all() {
    let (plan, _) = plan_for(
        &Config::default(),
        &[HEADER, &["pp_dynata", "r1", "", "", "D1", "", "", "screened"]],
    );
    // the only data row is incomplete, so nothing is generated
    assert!(plan.artifacts.is_empty());
    assert!(plan.report.is_empty());
}
