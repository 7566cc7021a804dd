// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{ReconcileError, Result};
use crate::models::{Status, Transaction, validate_feed};

/// Issues `REC-<millis>` references, strictly increasing within a process.
#[derive(Debug, Default)]
pub struct RefGenerator {
    last: i64,
}

impl RefGenerator {
    pub fn next_ref(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        format!("REC-{}", self.last)
    }
}

#[derive(Debug, Default)]
pub struct TransactionStore {
    rows: Vec<Transaction>,
    refs: RefGenerator,
}

impl TransactionStore {
    pub fn new(rows: Vec<Transaction>) -> Result<Self> {
        validate_feed(&rows)?;
        Ok(Self {
            rows,
            refs: RefGenerator::default(),
        })
    }

    /// Rows in load order.
    pub fn list(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Result<&Transaction> {
        self.rows
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ReconcileError::transaction(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.iter().any(|t| t.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|t| t.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|t| t.id.as_str())
    }

    /// Swaps in a freshly loaded feed. A rejected feed leaves the store untouched.
    pub fn replace_all(&mut self, rows: Vec<Transaction>) -> Result<()> {
        validate_feed(&rows)?;
        info!(count = rows.len(), "transaction list replaced");
        self.rows = rows;
        Ok(())
    }

    pub fn reconcile(
        &mut self,
        transaction_id: &str,
        chosen_match_id: &str,
    ) -> Result<Transaction> {
        let idx = self
            .position(transaction_id)
            .ok_or_else(|| ReconcileError::transaction(transaction_id))?;
        let new_ref = self.refs.next_ref();

        let row = &mut self.rows[idx];
        if row.status == Status::Reconciled {
            debug!(
                id = transaction_id,
                previous = ?row.ref_id,
                "re-stamping an already reconciled transaction"
            );
        }
        row.status = Status::Reconciled;
        row.confidence = None;
        row.ref_id = Some(new_ref);
        info!(
            id = transaction_id,
            matched = chosen_match_id,
            ref_id = ?row.ref_id,
            "transaction reconciled"
        );
        Ok(row.clone())
    }
}
