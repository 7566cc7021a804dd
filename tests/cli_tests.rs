// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::page;
use recondesk::cli;
use recondesk::commands::{exporter, reconcile, transactions};
use recondesk::config::Config;
use recondesk::events::Event;
use chrono::NaiveDate;
use recondesk::models::{RecordKind, Status, TaxCode};
use tempfile::tempdir;

fn sub(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["recondesk"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some((_, m)) => m.clone(),
        None => panic!("no subcommand parsed"),
    }
}

#[test]
fn list_filters_and_limits() {
    let p = page();
    let cfg = Config {
        as_of: NaiveDate::from_ymd_opt(2029, 5, 1),
        ..Config::default()
    };
    let rows = transactions::query_rows(&p, &cfg, &sub(&["list", "--status", "ai-match"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "T2");
    assert_eq!(rows[0].status, "AI Match 65%");
    assert_eq!(rows[0].amount, "1,000.00 Dr");
    assert_eq!(rows[0].date, "26-04-2029");

    let rows = transactions::query_rows(
        &p,
        &cfg,
        &sub(&["list", "--sort", "amount", "--asc", "--limit", "2"]),
    )
    .unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["T1", "T3"]);
}

#[test]
fn list_rejects_unknown_status() {
    let p = page();
    let err = transactions::query_rows(&p, &Config::default(), &sub(&["list", "--status", "done"]))
        .err()
        .unwrap();
    assert!(err.to_string().contains("Unknown status"));
}

#[test]
fn reconcile_with_chosen_match() {
    let mut p = page();
    let updated = reconcile::reconcile(&mut p, &sub(&["reconcile", "--id", " T2 ", "--match", "c2"])).unwrap();
    assert_eq!(updated.status, Status::Reconciled);
    assert!(!p.session.is_open());
    assert_eq!(p.sink(), &vec![Event::Reconciled("T2".into())]);
}

#[test]
fn reconcile_with_bad_match_closes_drawer() {
    let mut p = page();
    let err = reconcile::reconcile(&mut p, &sub(&["reconcile", "--id", "T1", "--match", "zz"])).unwrap_err();
    assert!(err.to_string().contains("candidate 'zz' not found"));
    assert!(!p.session.is_open());
    assert_eq!(p.store.get_by_id("T1").unwrap().status, Status::Pending);
}

#[test]
fn reconcile_with_new_record() {
    let mut p = page();
    reconcile::reconcile(
        &mut p,
        &sub(&[
            "reconcile", "--id", "T1", "--contact", "Etisalat", "--account", "6100", "--kind", "expense",
        ]),
    )
    .unwrap();
    assert_eq!(p.store.get_by_id("T1").unwrap().status, Status::Reconciled);

    let err = reconcile::reconcile(&mut p, &sub(&["reconcile", "--id", "T2", "--contact", "Etisalat"]))
        .unwrap_err();
    assert!(err.to_string().contains("needs an account"));
}

#[test]
fn new_record_takes_every_form_field() {
    let m = sub(&[
        "reconcile", "--id", "T1", "--contact", "Etisalat", "--account", "6100", "--kind",
        "transfer", "--tax", "none", "--reference", "INV-7", "--project", "proj-1", "--notes",
        "paid at branch",
    ]);
    let record = reconcile::manual_record_from_args(&m).unwrap().unwrap();
    assert_eq!(record.kind, RecordKind::Transfer);
    assert_eq!(record.tax, TaxCode::None);
    assert_eq!(record.reference.as_deref(), Some("INV-7"));
    assert_eq!(record.project.as_deref(), Some("proj-1"));
    assert_eq!(record.notes.as_deref(), Some("paid at branch"));

    let m = sub(&["reconcile", "--id", "T1", "--contact", "Etisalat", "--account", "6100"]);
    let record = reconcile::manual_record_from_args(&m).unwrap().unwrap();
    assert_eq!(record.tax, TaxCode::Gst5);
    assert_eq!(record.project, None);

    let m = sub(&["reconcile", "--id", "T1", "--contact", "E", "--account", "1", "--tax", "vat"]);
    let err = reconcile::manual_record_from_args(&m).unwrap_err();
    assert!(err.to_string().contains("Unknown tax code"));
}

#[test]
fn list_defaults_to_last_thirty_days() {
    let p = page();
    let cfg = Config {
        as_of: NaiveDate::from_ymd_opt(2029, 7, 1),
        ..Config::default()
    };
    let rows = transactions::query_rows(&p, &cfg, &sub(&["list"])).unwrap();
    assert!(rows.is_empty());
    let rows = transactions::query_rows(&p, &cfg, &sub(&["list", "--range", "all"])).unwrap();
    assert_eq!(rows.len(), 3);

    let cfg = Config {
        as_of: NaiveDate::from_ymd_opt(2029, 5, 1),
        ..Config::default()
    };
    assert_eq!(transactions::query_rows(&p, &cfg, &sub(&["list"])).unwrap().len(), 3);
}

#[test]
fn bulk_reconciles_listed_ids() {
    let mut p = page();
    let outcome = reconcile::bulk(&mut p, &sub(&["bulk", "--ids", "T1, T2"])).unwrap();
    assert_eq!(outcome.reconciled.len(), 2);
    assert!(p.selection.is_empty());
}

#[test]
fn auto_emits_request() {
    let mut p = page();
    reconcile::auto(&mut p);
    assert_eq!(p.sink(), &vec![Event::AutoReconcileRequested]);
}

#[test]
fn export_selected_to_csv() {
    let mut p = page();
    let dir = tempdir().unwrap();
    let out = dir.path().join("selected.csv");
    let out_str = out.to_string_lossy().to_string();

    exporter::handle(
        &mut p,
        &Config::default(),
        &sub(&["export", "--ids", "T3,T2", "--out", &out_str]),
    )
    .unwrap();

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(&headers[0], "id");
    let recs: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(recs.len(), 2);
    assert_eq!(&recs[0][0], "T2");
    assert_eq!(&recs[0][4], "ai-match");
    assert_eq!(&recs[0][5], "65");
    assert_eq!(&recs[1][0], "T3");
    assert_eq!(&recs[1][3], "26-04-2025");
}

#[test]
fn export_all_as_json() {
    let mut p = page();
    let dir = tempdir().unwrap();
    let out = dir.path().join("all.json");
    let out_str = out.to_string_lossy().to_string();
    exporter::handle(
        &mut p,
        &Config::default(),
        &sub(&["export", "--all", "--format", "json", "--out", &out_str]),
    )
    .unwrap();
    let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 3);
    assert_eq!(v[1]["confidence"], 65);
}

#[test]
fn export_needs_a_selection() {
    let mut p = page();
    let dir = tempdir().unwrap();
    let out_str = dir.path().join("x.csv").to_string_lossy().to_string();
    let err = exporter::handle(&mut p, &Config::default(), &sub(&["export", "--out", &out_str])).unwrap_err();
    assert!(err.to_string().contains("Nothing selected"));
}
