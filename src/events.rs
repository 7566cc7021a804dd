// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Reconciled(String),
    AutoReconcileRequested,
}

impl Event {
    /// Title and body of the notice shown for this event.
    pub fn notice(&self) -> (&'static str, &'static str) {
        match self {
            Event::Reconciled(_) => (
                "Transaction Reconciled",
                "The transaction has been successfully matched and reconciled.",
            ),
            Event::AutoReconcileRequested => (
                "Auto-Reconcile Started",
                "Analyzing transactions with AI rules...",
            ),
        }
    }
}

pub trait NotificationSink {
    fn notify(&mut self, event: &Event);
}

impl NotificationSink for Vec<Event> {
    fn notify(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// Prints each notice to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&mut self, event: &Event) {
        info!(?event, "notify");
        let (title, body) = event.notice();
        match event {
            Event::Reconciled(id) => println!("{} [{}]: {}", title, id, body),
            Event::AutoReconcileRequested => println!("{}: {}", title, body),
        }
    }
}
