// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl ReconcileError {
    pub fn transaction(id: &str) -> Self {
        ReconcileError::NotFound {
            kind: "transaction",
            id: id.to_string(),
        }
    }

    pub fn candidate(id: &str) -> Self {
        ReconcileError::NotFound {
            kind: "candidate",
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ReconcileError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
