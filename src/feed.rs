// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! JSON bank feed: an array of statement lines as the grid receives them.

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

use crate::error::{ReconcileError, Result};
use crate::models::{EntryType, Status, Transaction, validate_feed};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawTransaction {
    id: String,
    date: String,
    description: String,
    #[serde(default)]
    ref_id: Option<String>,
    status: Status,
    #[serde(default)]
    confidence: Option<i64>,
    amount: Decimal,
    r#type: EntryType,
}

impl RawTransaction {
    fn into_transaction(self, date_format: &str) -> Result<Transaction> {
        let date = NaiveDate::parse_from_str(self.date.trim(), date_format).map_err(|_| {
            ReconcileError::Validation(format!(
                "transaction '{}' has date '{}', expected {}",
                self.id, self.date, date_format
            ))
        })?;
        let confidence = match self.confidence {
            None => None,
            Some(c) => Some(u8::try_from(c).ok().filter(|c| *c <= 100).ok_or_else(|| {
                ReconcileError::Validation(format!(
                    "transaction '{}' confidence {} is outside 0-100",
                    self.id, c
                ))
            })?),
        };
        Ok(Transaction {
            id: self.id,
            date,
            description: self.description,
            ref_id: self.ref_id.filter(|r| !r.trim().is_empty()),
            status: self.status,
            confidence,
            amount: self.amount,
            r#type: self.r#type,
        })
    }
}

/// Parses and validates a feed. Any bad record rejects the whole feed.
pub fn parse_feed(json: &str, date_format: &str) -> Result<Vec<Transaction>> {
    let raw: Vec<RawTransaction> = serde_json::from_str(json)
        .map_err(|err| ReconcileError::Validation(format!("malformed feed: {}", err)))?;
    let rows = raw
        .into_iter()
        .map(|r| r.into_transaction(date_format))
        .collect::<Result<Vec<_>>>()?;
    validate_feed(&rows)?;
    Ok(rows)
}

pub fn read_feed(path: &Path, date_format: &str) -> anyhow::Result<Vec<Transaction>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Open feed {}", path.display()))?;
    let rows = parse_feed(&contents, date_format)
        .with_context(|| format!("Load feed {}", path.display()))?;
    Ok(rows)
}
