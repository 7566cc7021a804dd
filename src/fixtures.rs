// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Built-in demo feed for the Checking Account *9041 statement.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Candidate, EntryType, Status, Transaction};

fn day(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn row(
    id: &str,
    description: &str,
    ref_id: Option<&str>,
    status: Status,
    confidence: Option<u8>,
    amount: i64,
    kind: EntryType,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: day(26, 4, 2029),
        description: description.to_string(),
        ref_id: ref_id.map(str::to_string),
        status,
        confidence,
        amount: Decimal::new(amount * 100, 2),
        r#type: kind,
    }
}

#[rustfmt::skip]
pub fn transactions() -> Vec<Transaction> {
    use EntryType::{Credit, Debit};
    use Status::{AiMatch, Pending, Reconciled};
    vec![
        row("1", "Transfernon Maintenance of Balance Fee...", Some("26-04/2029"), Pending, None, 150, Debit),
        row("2", "Transfernon Maintenance Account Services", Some("26-04/2021"), AiMatch, Some(65), 1000, Credit),
        row("3", "Transfernon Maintenance Monthly Charge", Some("26-04-2025"), Reconciled, None, 150, Debit),
        row("4", "Transfernon Maintenance Quarterly Review", Some("26-04-2024"), Reconciled, None, 1000, Credit),
        row("5", "Transfernon Maintenance Service Fee", None, Pending, None, 150, Debit),
        row("6", "Transfernon Maintenance Annual Premium", Some("26-04-2029"), Reconciled, None, 150, Debit),
        row("7", "Transfernon Maintenance Network Access", Some("26-04-2027"), Pending, None, 1000, Credit),
        row("8", "Transfernon Maintenance Security Patch", Some("26-04-2029"), Reconciled, None, 150, Debit),
        row("9", "Transfernon Maintenance Software Update", Some("26-04-2026"), Reconciled, None, 1000, Credit),
        row("10", "Transfernon Maintenance Hardware Lease", Some("26-04-2021"), Pending, None, 150, Debit),
        row("11", "Transfernon Maintenance Support Contract", Some("26-04-2022"), Pending, None, 150, Debit),
        row("12", "Transfernon Maintenance License Renewal", Some("26-04-2023"), Pending, None, 150, Debit),
        row("13", "Transfernon Maintenance Cloud Hosting", Some("26-04-2024"), Reconciled, None, 1000, Credit),
    ]
}

pub fn candidates() -> Vec<Candidate> {
    let c = |id: &str, label: &str, date: NaiveDate, confidence: u8, explanation: &str| Candidate {
        id: id.to_string(),
        label: label.to_string(),
        date,
        amount: Decimal::new(15000, 2),
        confidence,
        explanation: explanation.to_string(),
    };
    vec![
        c(
            "1",
            "Inv #2024-99",
            day(25, 4, 2029),
            95,
            "Exact match found on Amount (150.00) and Supplier Name in existing bills.",
        ),
        c(
            "2",
            "Inv #2024-91",
            day(26, 3, 2029),
            60,
            "Amount matches exactly, but date is 1 month off.",
        ),
        c(
            "3",
            "Inv #2024-85",
            day(26, 2, 2029),
            45,
            "Amount matches, date is 2 months off.",
        ),
    ]
}
