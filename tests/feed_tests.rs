// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use recondesk::error::ReconcileError;
use recondesk::feed::{parse_feed, read_feed};
use recondesk::fixtures;
use recondesk::models::{EntryType, Status, validate_feed};
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

const FMT: &str = "%d-%m-%Y";

#[test]
fn parses_grid_records() {
    let json = r#"[
        {"id":"1","date":"26-04-2029","description":"Balance Fee","refId":"26-04/2029","status":"pending","amount":150.0,"type":"debit"},
        {"id":"2","date":"26-04-2029","description":"Account Services","refId":null,"status":"ai-match","confidence":65,"amount":"1000.00","type":"credit"}
    ]"#;
    let rows = parse_feed(json, FMT).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2029, 4, 26).unwrap());
    assert_eq!(rows[0].ref_id.as_deref(), Some("26-04/2029"));
    assert_eq!(rows[1].status, Status::AiMatch);
    assert_eq!(rows[1].confidence, Some(65));
    assert_eq!(rows[1].amount, Decimal::new(100000, 2));
    assert_eq!(rows[1].r#type, EntryType::Credit);
    assert!(rows[1].ref_id.is_none());
}

#[test]
fn rejects_bad_records() {
    let cases = [
        r#"[{"id":"1","date":"2029-04-26","description":"x","status":"pending","amount":1,"type":"debit"}]"#,
        r#"[{"id":"1","date":"26-04-2029","description":"x","status":"ai-match","confidence":140,"amount":1,"type":"debit"}]"#,
        r#"[{"id":"1","date":"26-04-2029","description":"x","status":"ai-match","confidence":-1,"amount":1,"type":"debit"}]"#,
        r#"[{"id":"1","date":"26-04-2029","description":"x","status":"pending","confidence":10,"amount":1,"type":"debit"}]"#,
        r#"[{"id":"1","date":"26-04-2029","description":"x","status":"lost","amount":1,"type":"debit"}]"#,
        r#"[{"id":"1","date":"26-04-2029","description":"x","status":"pending","amount":1,"type":"debit"},
            {"id":"1","date":"26-04-2029","description":"y","status":"pending","amount":2,"type":"debit"}]"#,
        r#"{"id":"1"}"#,
    ];
    for json in cases {
        assert!(
            matches!(parse_feed(json, FMT), Err(ReconcileError::Validation(_))),
            "accepted {}",
            json
        );
    }
}

#[test]
fn reads_feed_from_disk() {
    let mut f = NamedTempFile::new().unwrap();
    write!(
        f,
        r#"[{{"id":"9","date":"01-05-2029","description":"Fee","status":"reconciled","amount":5,"type":"debit","refId":"R9"}}]"#
    )
    .unwrap();
    let rows = read_feed(f.path(), FMT).unwrap();
    assert_eq!(rows[0].id, "9");

    let err = read_feed(std::path::Path::new("/definitely/not/here.json"), FMT).unwrap_err();
    assert!(err.to_string().contains("Open feed"));
}

#[test]
fn builtin_statement_is_well_formed() {
    let rows = fixtures::transactions();
    assert_eq!(rows.len(), 13);
    validate_feed(&rows).unwrap();
    let count = |status: Status| rows.iter().filter(|t| t.status == status).count();
    assert_eq!(count(Status::Pending), 6);
    assert_eq!(count(Status::AiMatch), 1);
    assert_eq!(count(Status::Reconciled), 6);
    let security_patch = rows.iter().find(|t| t.id == "8").unwrap();
    assert_eq!(security_patch.status, Status::Reconciled);
    assert_eq!(security_patch.ref_id.as_deref(), Some("26-04-2029"));
    for c in fixtures::candidates() {
        c.validate().unwrap();
    }
}
