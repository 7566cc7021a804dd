// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::models::{Candidate, Transaction};

/// Supplies suggested matches for a bank line. Generation is opaque to the desk.
pub trait CandidateSource {
    fn candidates_for(&self, txn: &Transaction) -> Vec<Candidate>;
}

/// Hands every transaction the same fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidates {
    list: Vec<Candidate>,
}

impl StaticCandidates {
    pub fn new(list: Vec<Candidate>) -> Result<Self> {
        for c in &list {
            c.validate()?;
        }
        Ok(Self { list })
    }
}

impl CandidateSource for StaticCandidates {
    fn candidates_for(&self, _txn: &Transaction) -> Vec<Candidate> {
        self.list.clone()
    }
}

/// Highest confidence first; equal scores keep supplier order.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    candidates
}

/// Validates then ranks what a supplier returned.
pub fn ranked_for(source: &dyn CandidateSource, txn: &Transaction) -> Result<Vec<Candidate>> {
    let list = source.candidates_for(txn);
    for c in &list {
        c.validate()?;
    }
    Ok(rank(list))
}
