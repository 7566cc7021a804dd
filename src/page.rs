// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Owns the store, the selection and the session, and turns user actions
//! into operations on them. Events go to the sink after each successful change.

use tracing::{info, warn};

use crate::candidates::{CandidateSource, ranked_for};
use crate::error::{ReconcileError, Result};
use crate::events::{Event, NotificationSink};
use crate::models::{ManualRecord, Status, Transaction};
use crate::selection::SelectionSet;
use crate::session::{Direction, ReconciliationSession};
use crate::store::TransactionStore;

pub struct ReconciliationPage<S: CandidateSource, N: NotificationSink> {
    pub store: TransactionStore,
    pub selection: SelectionSet,
    pub session: ReconciliationSession,
    source: S,
    sink: N,
}

impl<S: CandidateSource, N: NotificationSink> ReconciliationPage<S, N> {
    pub fn new(store: TransactionStore, source: S, sink: N) -> Self {
        Self {
            store,
            selection: SelectionSet::new(),
            session: ReconciliationSession::new(),
            source,
            sink,
        }
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads a new feed. Selection is reset; an open session survives only if
    /// its transaction is still present.
    pub fn reload(&mut self, rows: Vec<Transaction>) -> Result<()> {
        self.store.replace_all(rows)?;
        self.selection.select_none();
        if let Some(id) = self.session.current_id().map(str::to_string) {
            if !self.store.contains(&id) {
                warn!(%id, "open transaction vanished on reload, closing session");
                self.session.cancel();
            }
        }
        Ok(())
    }

    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selection.select_all(self.store.ids());
        } else {
            self.selection.select_none();
        }
    }

    pub fn toggle(&mut self, id: &str, checked: bool) -> Result<()> {
        if checked && !self.store.contains(id) {
            return Err(ReconcileError::transaction(id));
        }
        self.selection.toggle(id, checked);
        Ok(())
    }

    pub fn open(&mut self, id: &str) -> Result<()> {
        self.session.open_for(&self.store, &self.source, id)
    }

    pub fn pick(&mut self, match_id: &str) -> Result<()> {
        self.session.select_candidate(match_id)
    }

    pub fn create_record(&mut self, record: ManualRecord) -> Result<()> {
        self.session.use_manual_record(record)
    }

    pub fn previous(&mut self) -> Result<()> {
        self.session
            .advance(&self.store, &self.source, Direction::Previous)
    }

    pub fn next(&mut self) -> Result<()> {
        self.session.advance(&self.store, &self.source, Direction::Next)
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    pub fn confirm(&mut self) -> Result<Transaction> {
        let updated = self.session.confirm(&mut self.store)?;
        self.sink.notify(&Event::Reconciled(updated.id.clone()));
        Ok(updated)
    }

    pub fn request_auto_reconcile(&mut self) {
        info!(pending = self.pending_count(), "auto-reconcile requested");
        self.sink.notify(&Event::AutoReconcileRequested);
    }

    /// Reconciles every selected row against its best-ranked candidate.
    /// Rows without a candidate are skipped and reported back.
    pub fn reconcile_selected(&mut self) -> Result<BulkOutcome> {
        if self.selection.is_empty() {
            return Err(ReconcileError::InvalidState(
                "bulk action needs at least one selected transaction".into(),
            ));
        }
        let ids: Vec<String> = self
            .selection
            .ordered(&self.store)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut outcome = BulkOutcome::default();
        for id in ids {
            let txn = self.store.get_by_id(&id)?;
            let best = ranked_for(&self.source, txn)?.into_iter().next();
            match best {
                Some(candidate) => {
                    self.store.reconcile(&id, &candidate.id)?;
                    self.sink.notify(&Event::Reconciled(id.clone()));
                    outcome.reconciled.push(id);
                }
                None => outcome.skipped.push(id),
            }
        }
        info!(
            reconciled = outcome.reconciled.len(),
            skipped = outcome.skipped.len(),
            "bulk reconcile finished"
        );
        Ok(outcome)
    }

    /// Selected rows in load order, for export.
    pub fn selected_rows(&self) -> Vec<&Transaction> {
        self.store
            .list()
            .iter()
            .filter(|t| self.selection.contains(&t.id))
            .collect()
    }

    fn pending_count(&self) -> usize {
        self.store
            .list()
            .iter()
            .filter(|t| t.status != Status::Reconciled)
            .count()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BulkOutcome {
    pub reconciled: Vec<String>,
    pub skipped: Vec<String>,
}
