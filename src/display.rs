// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Side-effect free projections from rows to what the grid and drawer show.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::models::{EntryType, Status, Transaction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub status: Status,
    pub label: String,
}

pub fn status_badge(txn: &Transaction) -> StatusBadge {
    let label = match txn.status {
        Status::Pending => "Pending".to_string(),
        Status::AiMatch => format!("AI Match {}%", txn.confidence.unwrap_or(0)),
        Status::Reconciled => "Reconciled".to_string(),
    };
    StatusBadge {
        status: txn.status,
        label,
    }
}

/// What clicking the row's action button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Link,
    FindMatch,
    View,
}

pub fn row_action(status: Status) -> RowAction {
    match status {
        Status::Pending => RowAction::Link,
        Status::AiMatch => RowAction::FindMatch,
        Status::Reconciled => RowAction::View,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfidenceTier {
    Muted,
    Warning,
    Info,
    Success,
}

pub fn confidence_tier(confidence: u8) -> ConfidenceTier {
    if confidence >= 90 {
        ConfidenceTier::Success
    } else if confidence >= 70 {
        ConfidenceTier::Info
    } else if confidence >= 50 {
        ConfidenceTier::Warning
    } else {
        ConfidenceTier::Muted
    }
}

/// `1234.5` -> `1,234.50`
pub fn fmt_amount(d: &Decimal) -> String {
    let mut r = d.abs().round_dp(2);
    r.rescale(2);
    let s = r.to_string();
    let (int, frac) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}.{}", grouped, frac)
}

/// Grid cell: `1,000.00 Cr`
pub fn grid_amount(amount: &Decimal, kind: EntryType) -> String {
    format!("{} {}", fmt_amount(amount), kind.short())
}

/// Drawer header: `1,000.00 AED (Cr)`
pub fn drawer_amount(amount: &Decimal, kind: EntryType, currency: &str) -> String {
    format!("{} {} ({})", fmt_amount(amount), currency, kind.short())
}

pub fn ref_cell(txn: &Transaction) -> &str {
    txn.ref_id.as_deref().unwrap_or("-")
}

/// Header checkbox is ticked only when every row is selected.
pub fn header_checked(selected: usize, rows: usize) -> bool {
    rows > 0 && selected == rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Amount,
}

impl SortField {
    pub fn parse(s: &str) -> Option<SortField> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Some(SortField::Date),
            "amount" => Some(SortField::Amount),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Stable ordering over borrowed rows; the store is never reordered.
pub fn sorted<'a>(
    rows: impl IntoIterator<Item = &'a Transaction>,
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a Transaction> {
    let mut out: Vec<&Transaction> = rows.into_iter().collect();
    out.sort_by(|a, b| {
        let ord: Ordering = match field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a.amount.cmp(&b.amount),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    out
}
