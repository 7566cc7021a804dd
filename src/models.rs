// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ReconcileError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    AiMatch,
    Reconciled,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::AiMatch => "ai-match",
            Status::Reconciled => "reconciled",
        }
    }

    pub fn parse(s: &str) -> Option<Status> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Status::Pending),
            "ai-match" | "aimatch" | "ai_match" => Some(Status::AiMatch),
            "reconciled" => Some(Status::Reconciled),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sign convention of a statement line. Display only; amounts are magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Debit,
    Credit,
}

impl EntryType {
    pub fn short(&self) -> &'static str {
        match self {
            EntryType::Debit => "Dr",
            EntryType::Credit => "Cr",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub ref_id: Option<String>,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    pub amount: Decimal,
    pub r#type: EntryType,
}

impl Transaction {
    /// Checks the record-level invariants a data source must uphold.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ReconcileError::Validation(
                "transaction id must not be empty".into(),
            ));
        }
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(ReconcileError::Validation(format!(
                "transaction '{}' has negative amount {}",
                self.id, self.amount
            )));
        }
        match (self.status, self.confidence) {
            (Status::AiMatch, None) => Err(ReconcileError::Validation(format!(
                "transaction '{}' is an AI match without confidence",
                self.id
            ))),
            (Status::AiMatch, Some(c)) if c > 100 => Err(ReconcileError::Validation(format!(
                "transaction '{}' confidence {} is outside 0-100",
                self.id, c
            ))),
            (Status::Pending | Status::Reconciled, Some(_)) => {
                Err(ReconcileError::Validation(format!(
                    "transaction '{}' carries confidence but is {}",
                    self.id, self.status
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Validates a whole feed, including id uniqueness across records.
pub fn validate_feed(list: &[Transaction]) -> Result<()> {
    let mut seen = HashSet::new();
    for t in list {
        t.validate()?;
        if !seen.insert(t.id.as_str()) {
            return Err(ReconcileError::Validation(format!(
                "duplicate transaction id '{}'",
                t.id
            )));
        }
    }
    Ok(())
}

/// A suggested accounting record proposed as the counterpart of a bank line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub label: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub confidence: u8,
    pub explanation: String,
}

impl Candidate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ReconcileError::Validation(
                "candidate id must not be empty".into(),
            ));
        }
        if self.confidence > 100 {
            return Err(ReconcileError::Validation(format!(
                "candidate '{}' confidence {} is outside 0-100",
                self.id, self.confidence
            )));
        }
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(ReconcileError::Validation(format!(
                "candidate '{}' has negative amount",
                self.id
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    #[default]
    BillPayment,
    Expense,
    Transfer,
}

impl RecordKind {
    pub fn parse(s: &str) -> Option<RecordKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bill-payment" | "bill" => Some(RecordKind::BillPayment),
            "expense" => Some(RecordKind::Expense),
            "transfer" => Some(RecordKind::Transfer),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::BillPayment => "Bill Payment",
            RecordKind::Expense => "Expense Voucher",
            RecordKind::Transfer => "Bank Transfer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxCode {
    #[default]
    Gst5,
    None,
}

impl TaxCode {
    pub fn parse(s: &str) -> Option<TaxCode> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gst" | "gst5" | "gst-5" => Some(TaxCode::Gst5),
            "none" => Some(TaxCode::None),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaxCode::Gst5 => "GST (5%)",
            TaxCode::None => "No Tax",
        }
    }
}

/// A record typed in by hand on the "Create New" tab.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ManualRecord {
    pub kind: RecordKind,
    pub contact: String,
    pub account: String,
    pub tax: TaxCode,
    pub reference: Option<String>,
    pub project: Option<String>,
    pub notes: Option<String>,
}

impl ManualRecord {
    pub fn validate(&self) -> Result<()> {
        if self.contact.trim().is_empty() {
            return Err(ReconcileError::Validation(
                "manual record needs a contact".into(),
            ));
        }
        if self.account.trim().is_empty() {
            return Err(ReconcileError::Validation(
                "manual record needs an account".into(),
            ));
        }
        Ok(())
    }

    /// Identifier handed to the store as the chosen match.
    pub fn match_id(&self) -> String {
        match self.reference.as_deref().map(str::trim) {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => format!("MANUAL-{}", self.contact.trim()),
        }
    }
}
