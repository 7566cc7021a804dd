// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::NaiveDate;
use recondesk::candidates::StaticCandidates;
use recondesk::events::Event;
use recondesk::models::{Candidate, EntryType, Status, Transaction};
use recondesk::page::ReconciliationPage;
use recondesk::store::TransactionStore;
use rust_decimal::Decimal;

pub fn txn(id: &str, status: Status, confidence: Option<u8>, amount: i64) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(2029, 4, 26).unwrap(),
        description: format!("Statement line {}", id),
        ref_id: None,
        status,
        confidence,
        amount: Decimal::new(amount, 2),
        r#type: EntryType::Debit,
    }
}

/// T1 pending, T2 AI match at 65%, T3 reconciled.
pub fn three_rows() -> Vec<Transaction> {
    let mut t3 = txn("T3", Status::Reconciled, None, 15000);
    t3.ref_id = Some("26-04-2025".into());
    vec![
        txn("T1", Status::Pending, None, 15000),
        txn("T2", Status::AiMatch, Some(65), 100000),
        t3,
    ]
}

pub fn candidate(id: &str, label: &str, confidence: u8) -> Candidate {
    Candidate {
        id: id.to_string(),
        label: label.to_string(),
        date: NaiveDate::from_ymd_opt(2029, 4, 25).unwrap(),
        amount: Decimal::new(15000, 2),
        confidence,
        explanation: format!("{} looks right", label),
    }
}

/// Supplier order deliberately differs from rank order.
pub fn candidates() -> StaticCandidates {
    StaticCandidates::new(vec![
        candidate("c2", "Inv #2024-91", 60),
        candidate("c1", "Inv #2024-99", 95),
        candidate("c3", "Inv #2024-85", 45),
    ])
    .unwrap()
}

pub fn store() -> TransactionStore {
    TransactionStore::new(three_rows()).unwrap()
}

pub fn page() -> ReconciliationPage<StaticCandidates, Vec<Event>> {
    ReconciliationPage::new(store(), candidates(), Vec::new())
}
