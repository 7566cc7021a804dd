// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The side panel: which transaction is open and which match is highlighted.
//!
//! A session is either closed or open on exactly one transaction of the
//! store. Opening ranks the supplier's candidates and highlights the best
//! one; confirming hands the highlighted match to the store and closes.

use tracing::{debug, info};

use crate::candidates::{CandidateSource, ranked_for};
use crate::error::{ReconcileError, Result};
use crate::models::{Candidate, ManualRecord, Transaction};
use crate::store::TransactionStore;
use crate::utils::text_matcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerTab {
    #[default]
    AiSuggestions,
    FindMatch,
    CreateNew,
}

impl DrawerTab {
    pub fn parse(s: &str) -> Option<DrawerTab> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" | "ai-suggestions" | "suggestions" => Some(DrawerTab::AiSuggestions),
            "find" | "find-match" => Some(DrawerTab::FindMatch),
            "new" | "create-new" => Some(DrawerTab::CreateNew),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchChoice {
    Suggested(String),
    Manual(ManualRecord),
}

impl MatchChoice {
    pub fn match_id(&self) -> String {
        match self {
            MatchChoice::Suggested(id) => id.clone(),
            MatchChoice::Manual(record) => record.match_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenSession {
    pub transaction_id: String,
    pub candidates: Vec<Candidate>,
    pub highlighted: Option<MatchChoice>,
    pub tab: DrawerTab,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Closed,
    Open(OpenSession),
}

#[derive(Debug, Default)]
pub struct ReconciliationSession {
    state: SessionState,
}

impl ReconciliationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open(_))
    }

    pub fn current_id(&self) -> Option<&str> {
        match &self.state {
            SessionState::Open(open) => Some(open.transaction_id.as_str()),
            SessionState::Closed => None,
        }
    }

    pub fn highlighted_id(&self) -> Option<String> {
        match &self.state {
            SessionState::Open(open) => open.highlighted.as_ref().map(MatchChoice::match_id),
            SessionState::Closed => None,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        match &self.state {
            SessionState::Open(open) => &open.candidates,
            SessionState::Closed => &[],
        }
    }

    pub fn tab(&self) -> Option<DrawerTab> {
        match &self.state {
            SessionState::Open(open) => Some(open.tab),
            SessionState::Closed => None,
        }
    }

    pub fn open_for(
        &mut self,
        store: &TransactionStore,
        source: &dyn CandidateSource,
        transaction_id: &str,
    ) -> Result<()> {
        let txn = store.get_by_id(transaction_id)?;
        let candidates = ranked_for(source, txn)?;
        let highlighted = candidates
            .first()
            .map(|c| MatchChoice::Suggested(c.id.clone()));
        info!(
            id = transaction_id,
            default_match = ?highlighted.as_ref().map(MatchChoice::match_id),
            "session opened"
        );
        self.state = SessionState::Open(OpenSession {
            transaction_id: transaction_id.to_string(),
            candidates,
            highlighted,
            tab: DrawerTab::AiSuggestions,
        });
        Ok(())
    }

    fn open_mut(&mut self, op: &str) -> Result<&mut OpenSession> {
        match &mut self.state {
            SessionState::Open(open) => Ok(open),
            SessionState::Closed => Err(ReconcileError::InvalidState(format!(
                "cannot {op} while the session is closed"
            ))),
        }
    }

    pub fn select_candidate(&mut self, match_id: &str) -> Result<()> {
        let open = self.open_mut("select a candidate")?;
        if !open.candidates.iter().any(|c| c.id == match_id) {
            return Err(ReconcileError::candidate(match_id));
        }
        debug!(id = %open.transaction_id, candidate = match_id, "candidate highlighted");
        open.highlighted = Some(MatchChoice::Suggested(match_id.to_string()));
        Ok(())
    }

    pub fn use_manual_record(&mut self, record: ManualRecord) -> Result<()> {
        let open = self.open_mut("create a record")?;
        record.validate()?;
        debug!(id = %open.transaction_id, record = %record.match_id(), "manual record highlighted");
        open.highlighted = Some(MatchChoice::Manual(record));
        open.tab = DrawerTab::CreateNew;
        Ok(())
    }

    pub fn set_tab(&mut self, tab: DrawerTab) -> Result<()> {
        self.open_mut("switch tabs")?.tab = tab;
        Ok(())
    }

    /// Candidates of the open session whose label or explanation match `query`.
    pub fn search(&self, query: &str) -> Result<Vec<&Candidate>> {
        let SessionState::Open(open) = &self.state else {
            return Err(ReconcileError::InvalidState(
                "cannot search while the session is closed".into(),
            ));
        };
        let re = text_matcher(query)?;
        Ok(open
            .candidates
            .iter()
            .filter(|c| re.is_match(&c.label) || re.is_match(&c.explanation))
            .collect())
    }

    /// Reconciles the open transaction with the highlighted match and closes.
    /// On failure the session stays open.
    pub fn confirm(&mut self, store: &mut TransactionStore) -> Result<Transaction> {
        let open = self.open_mut("confirm")?;
        let match_id = open
            .highlighted
            .as_ref()
            .map(MatchChoice::match_id)
            .ok_or_else(|| ReconcileError::InvalidState("no match highlighted".into()))?;
        let updated = store.reconcile(&open.transaction_id, &match_id)?;
        self.state = SessionState::Closed;
        info!(id = %updated.id, "session closed on confirm");
        Ok(updated)
    }

    pub fn cancel(&mut self) {
        if let SessionState::Open(open) = &self.state {
            info!(id = %open.transaction_id, "session cancelled");
        }
        self.state = SessionState::Closed;
    }

    /// Moves to the neighbouring row in store order. At either end this is a no-op.
    pub fn advance(
        &mut self,
        store: &TransactionStore,
        source: &dyn CandidateSource,
        direction: Direction,
    ) -> Result<()> {
        let current = self.open_mut("navigate")?.transaction_id.clone();
        let idx = store
            .position(&current)
            .ok_or_else(|| ReconcileError::transaction(&current))?;
        let target = match direction {
            Direction::Previous => idx.checked_sub(1),
            Direction::Next => Some(idx + 1).filter(|i| *i < store.len()),
        };
        match target {
            Some(i) => {
                let next_id = store.list()[i].id.clone();
                self.open_for(store, source, &next_id)
            }
            None => {
                debug!(id = %current, ?direction, "already at boundary");
                Ok(())
            }
        }
    }
}
