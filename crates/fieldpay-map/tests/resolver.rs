use fieldpay_map::{HEADER_SCAN_LIMIT, resolve_headers};
use fieldpay_model::{Field, HeaderSpec, PayrunError};

fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

#[test]
fn finds_header_after_preamble_rows() {
    let sheet = rows(&[
        &["Project 2501 payment run"],
        &[""],
        &["exported 2024-11-03"],
        &["RESPONSE_ID", "Src — Source", "Status", "db.mobile"],
        &["r1", "referral", "Complete", "0912345678"],
    ]);
    let found = resolve_headers(&sheet, &HeaderSpec::default()).expect("header located");
    assert_eq!(found.header_row, 3);
    assert_eq!(found.columns.get(Field::ResponseId), Some(0));
    assert_eq!(found.columns.get(Field::Src), Some(1));
    assert_eq!(found.columns.get(Field::Status), Some(2));
    assert_eq!(found.columns.get(Field::DbMobile), Some(3));
    assert_eq!(found.columns.get(Field::Pprid), None);
}

#[test]
fn one_matching_cell_is_not_enough() {
    let sheet = rows(&[
        // only "Status" matches here; the row must not be taken as the header
        &["notes", "Status"],
        &["Response ID", "Status", "src - source"],
    ]);
    let found = resolve_headers(&sheet, &HeaderSpec::default()).expect("header located");
    assert_eq!(found.header_row, 1);
}

#[test]
fn earliest_qualifying_row_wins() {
    let sheet = rows(&[
        &["Response ID", "Status"],
        &["Response ID", "Status", "src - source", "db.mobile"],
    ]);
    let found = resolve_headers(&sheet, &HeaderSpec::default()).expect("header located");
    assert_eq!(found.header_row, 0);
}

#[test]
fn field_takes_the_leftmost_matching_cell() {
    let sheet = rows(&[&["Status", "Status (final)", "Response ID"]]);
    let found = resolve_headers(&sheet, &HeaderSpec::default()).expect("header located");
    assert_eq!(found.columns.get(Field::Status), Some(0));
    assert_eq!(found.columns.get(Field::ResponseId), Some(2));
}

#[test]
fn header_past_scan_window_is_not_found() {
    let mut raw: Vec<Vec<String>> = (0..HEADER_SCAN_LIMIT)
        .map(|i| vec![format!("preamble {i}")])
        .collect();
    raw.push(vec!["Response ID".to_string(), "Status".to_string()]);

    let err = resolve_headers(&raw, &HeaderSpec::default()).expect_err("beyond window");
    match err {
        PayrunError::HeaderNotFound { scanned, labels } => {
            assert_eq!(scanned, HEADER_SCAN_LIMIT);
            assert!(labels.contains(&"Response ID".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_header_error_names_the_labels() {
    let sheet = rows(&[&["just", "data", "cells"]]);
    let err = resolve_headers(&sheet, &HeaderSpec::default()).expect_err("no header");
    let message = err.to_string();
    assert!(message.contains("src - source"), "{message}");
    assert!(message.contains("referral incentive"), "{message}");
}

#[test]
fn blank_label_is_never_matched() {
    let headers = HeaderSpec {
        // a label of separators compacts to nothing and must not match
        pprid: " - ".to_string(),
        ..HeaderSpec::default()
    };
    let sheet = rows(&[&[" - ", "Response ID", "Status"]]);
    let found = resolve_headers(&sheet, &headers).expect("header located");
    assert_eq!(found.columns.get(Field::Pprid), None);
    assert_eq!(found.columns.get(Field::ResponseId), Some(1));
}

#[test]
fn substring_matches_work_both_ways() {
    // cell "source" is contained in label "src - source";
    // cell "complete incentive (VND)" contains the full label
    let sheet = rows(&[&["source", "complete incentive (VND)"]]);
    let found = resolve_headers(&sheet, &HeaderSpec::default()).expect("header located");
    assert_eq!(found.columns.get(Field::Src), Some(0));
    assert_eq!(found.columns.get(Field::CompleteIncentive), Some(1));
}
