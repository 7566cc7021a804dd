// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;

use tracing::debug;

use crate::store::TransactionStore;

/// Ids of the rows currently checked for bulk actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection with exactly `all_ids`; nothing from an earlier load survives.
    pub fn select_all<'a, I>(&mut self, all_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.ids = all_ids.into_iter().map(str::to_string).collect();
        debug!(size = self.ids.len(), "selected all");
    }

    pub fn select_none(&mut self) {
        self.ids.clear();
        debug!("selection cleared");
    }

    pub fn toggle(&mut self, id: &str, included: bool) {
        if included {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn size(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Drops ids that no longer reference a loaded transaction.
    pub fn retain_loaded(&mut self, store: &TransactionStore) {
        let before = self.ids.len();
        self.ids.retain(|id| store.contains(id));
        if self.ids.len() != before {
            debug!(dropped = before - self.ids.len(), "pruned stale selection");
        }
    }

    /// Selected ids in the store's row order.
    pub fn ordered<'a>(&self, store: &'a TransactionStore) -> Vec<&'a str> {
        store.ids().filter(|id| self.ids.contains(*id)).collect()
    }
}
