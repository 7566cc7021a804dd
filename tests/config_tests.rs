// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use recondesk::config::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn defaults_match_the_checking_account() {
    let cfg = Config::default();
    assert_eq!(cfg.currency, "AED");
    assert_eq!(cfg.account_label, "Checking Account *9041");
    assert_eq!(cfg.date_format, "%d-%m-%Y");
    assert!(cfg.data.is_none());
}

#[test]
fn loads_partial_file_and_resolves_data_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recondesk.toml");
    fs::write(
        &path,
        "currency = \"USD\"\ndata = \"feed.json\"\nas_of = \"2029-05-01\"\n",
    )
    .unwrap();

    let cfg = Config::find_and_load(Some(&path)).unwrap();
    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.account_label, "Checking Account *9041");
    assert_eq!(cfg.data, Some(dir.path().join("feed.json")));
    assert_eq!(cfg.as_of(), NaiveDate::from_ymd_opt(2029, 5, 1).unwrap());
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "colour = \"blue\"\n").unwrap();
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(Config::find_and_load(Some(&dir.path().join("absent.toml"))).is_err());
}
