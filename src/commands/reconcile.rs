// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::candidates::CandidateSource;
use crate::events::NotificationSink;
use crate::models::{ManualRecord, RecordKind, TaxCode, Transaction};
use crate::page::{BulkOutcome, ReconciliationPage};
use crate::utils::split_ids;

/// Builds the "Create New" record when `--contact` is given.
pub fn manual_record_from_args(sub: &clap::ArgMatches) -> Result<Option<ManualRecord>> {
    let Some(contact) = sub.get_one::<String>("contact") else {
        return Ok(None);
    };
    let text = |name: &str| {
        sub.get_one::<String>(name)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };
    let kind_raw = sub
        .get_one::<String>("kind")
        .map(String::as_str)
        .unwrap_or("bill-payment");
    let kind = RecordKind::parse(kind_raw)
        .ok_or_else(|| anyhow!("Unknown record kind '{}'", kind_raw))?;
    let tax_raw = sub.get_one::<String>("tax").map(String::as_str).unwrap_or("gst");
    let tax = TaxCode::parse(tax_raw).ok_or_else(|| anyhow!("Unknown tax code '{}'", tax_raw))?;
    Ok(Some(ManualRecord {
        kind,
        contact: contact.trim().to_string(),
        account: text("account").unwrap_or_default(),
        tax,
        reference: text("reference"),
        project: text("project"),
        notes: text("notes"),
    }))
}

fn apply_choice<S: CandidateSource, N: NotificationSink>(
    page: &mut ReconciliationPage<S, N>,
    sub: &clap::ArgMatches,
) -> Result<Transaction> {
    if let Some(record) = manual_record_from_args(sub)? {
        page.create_record(record)?;
    } else if let Some(m) = sub.get_one::<String>("match") {
        page.pick(m.trim())?;
    }
    Ok(page.confirm()?)
}

/// Opens the drawer, applies the requested match and confirms.
pub fn reconcile<S: CandidateSource, N: NotificationSink>(
    page: &mut ReconciliationPage<S, N>,
    sub: &clap::ArgMatches,
) -> Result<Transaction> {
    let id = sub
        .get_one::<String>("id")
        .ok_or_else(|| anyhow!("--id is required"))?
        .trim()
        .to_string();
    page.open(&id)?;

    let result = apply_choice(page, sub);
    if result.is_err() {
        page.cancel();
    }
    let updated = result?;
    println!(
        "Reconciled {} -> {}",
        updated.id,
        updated.ref_id.as_deref().unwrap_or("-")
    );
    Ok(updated)
}

pub fn bulk<S: CandidateSource, N: NotificationSink>(
    page: &mut ReconciliationPage<S, N>,
    sub: &clap::ArgMatches,
) -> Result<BulkOutcome> {
    let raw = sub
        .get_one::<String>("ids")
        .ok_or_else(|| anyhow!("--ids is required"))?;
    for id in split_ids(raw) {
        page.toggle(&id, true)?;
    }
    let outcome = page.reconcile_selected()?;
    page.select_all(false);
    println!(
        "Reconciled {} transaction(s){}",
        outcome.reconciled.len(),
        if outcome.skipped.is_empty() {
            String::new()
        } else {
            format!(", skipped {} without a match", outcome.skipped.len())
        }
    );
    Ok(outcome)
}

pub fn auto<S: CandidateSource, N: NotificationSink>(page: &mut ReconciliationPage<S, N>) {
    page.request_auto_reconcile();
}
