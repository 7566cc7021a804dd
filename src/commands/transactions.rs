// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use serde::Serialize;

use crate::candidates::CandidateSource;
use crate::config::Config;
use crate::display::{
    ConfidenceTier, SortDirection, SortField, confidence_tier, drawer_amount, fmt_amount,
    grid_amount, header_checked, ref_cell, row_action, sorted, status_badge,
};
use crate::events::NotificationSink;
use crate::filter::{DateRange, Filter};
use crate::models::{Status, Transaction};
use crate::page::ReconciliationPage;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub selected: bool,
    pub date: String,
    pub description: String,
    pub reference: String,
    pub status: String,
    pub amount: String,
    pub action: String,
}

pub fn to_row(t: &Transaction, selected: bool, cfg: &Config) -> TransactionRow {
    TransactionRow {
        id: t.id.clone(),
        selected,
        date: t.date.format(&cfg.date_format).to_string(),
        description: t.description.clone(),
        reference: ref_cell(t).to_string(),
        status: status_badge(t).label,
        amount: grid_amount(&t.amount, t.r#type),
        action: format!("{:?}", row_action(t.status)),
    }
}

pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<Filter> {
    let status = match sub.get_one::<String>("status") {
        Some(s) => Some(Status::parse(s).ok_or_else(|| anyhow!("Unknown status '{}'", s))?),
        None => None,
    };
    let range = match sub.get_one::<String>("range") {
        Some(r) => DateRange::parse(r).ok_or_else(|| anyhow!("Unknown date range '{}'", r))?,
        None => DateRange::All,
    };
    Ok(Filter {
        search: sub.get_one::<String>("search").cloned(),
        status,
        range,
    })
}

pub fn query_rows<S: CandidateSource, N: NotificationSink>(
    page: &ReconciliationPage<S, N>,
    cfg: &Config,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let filter = filter_from_args(sub)?;
    let field = match sub.get_one::<String>("sort") {
        Some(s) => SortField::parse(s).ok_or_else(|| anyhow!("Unknown sort field '{}'", s))?,
        None => SortField::Date,
    };
    let direction = if sub.get_flag("asc") {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };

    let visible = filter.apply(page.store.list(), cfg.as_of())?;
    let mut rows: Vec<TransactionRow> = sorted(visible, field, direction)
        .into_iter()
        .map(|t| to_row(t, page.selection.contains(&t.id), cfg))
        .collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

pub fn print_grid(rows: &[TransactionRow], selected: usize, total: usize) {
    let mark = if header_checked(selected, total) { "[x]" } else { "[ ]" };
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                if r.selected { "[x]".into() } else { "[ ]".into() },
                r.id.clone(),
                r.date.clone(),
                r.description.clone(),
                r.reference.clone(),
                r.status.clone(),
                r.amount.clone(),
                r.action.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[mark, "ID", "Date", "Description", "Ref ID", "Status", "Amount", "Action"],
            data,
        )
    );
    println!("Bulk Actions ({} selected)", selected);
}

pub fn list<S: CandidateSource, N: NotificationSink>(
    page: &ReconciliationPage<S, N>,
    cfg: &Config,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let data = query_rows(page, cfg, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!("Bank Reconciliation - {}", cfg.account_label);
        print_grid(&data, page.selection.size(), page.store.len());
    }
    Ok(())
}

#[derive(Serialize)]
pub struct SuggestionRow {
    pub id: String,
    pub label: String,
    pub date: String,
    pub amount: String,
    pub confidence: u8,
    pub tier: String,
    pub best: bool,
    pub highlighted: bool,
    pub explanation: String,
}

/// Suggestions of the open session, optionally narrowed by a search.
pub fn suggestion_rows<S: CandidateSource, N: NotificationSink>(
    page: &ReconciliationPage<S, N>,
    cfg: &Config,
    find: Option<&str>,
) -> Result<Vec<SuggestionRow>> {
    let highlighted = page.session.highlighted_id();
    let best = page.session.candidates().first().map(|c| c.id.clone());
    let shown = match find {
        Some(q) => page.session.search(q)?,
        None => page.session.candidates().iter().collect(),
    };
    Ok(shown
        .into_iter()
        .map(|c| SuggestionRow {
            id: c.id.clone(),
            label: c.label.clone(),
            date: c.date.format(&cfg.date_format).to_string(),
            amount: format!("{} {}", fmt_amount(&c.amount), cfg.currency),
            confidence: c.confidence,
            tier: tier_name(confidence_tier(c.confidence)).to_string(),
            best: best.as_deref() == Some(c.id.as_str()),
            highlighted: highlighted.as_deref() == Some(c.id.as_str()),
            explanation: c.explanation.clone(),
        })
        .collect())
}

fn tier_name(tier: ConfidenceTier) -> &'static str {
    match tier {
        ConfidenceTier::Success => "success",
        ConfidenceTier::Info => "info",
        ConfidenceTier::Warning => "warning",
        ConfidenceTier::Muted => "muted",
    }
}

pub fn print_drawer<S: CandidateSource, N: NotificationSink>(
    page: &ReconciliationPage<S, N>,
    cfg: &Config,
    find: Option<&str>,
) -> Result<()> {
    let id = page
        .session
        .current_id()
        .ok_or_else(|| anyhow!("No transaction is open"))?;
    let txn = page.store.get_by_id(id)?;
    println!("Reconcile Transaction");
    println!(
        "{}",
        pretty_table(
            &["Date", "Description", "Amount"],
            vec![vec![
                txn.date.format(&cfg.date_format).to_string(),
                txn.description.clone(),
                drawer_amount(&txn.amount, txn.r#type, &cfg.currency),
            ]],
        )
    );

    let rows = suggestion_rows(page, cfg, find)?;
    if page.session.candidates().len() > 1 {
        println!("Multiple potential matches found. Please select the correct invoice.");
    }
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                if r.highlighted { "(*)".into() } else { "( )".into() },
                r.id.clone(),
                if r.best {
                    format!("{} [Best Match]", r.label)
                } else {
                    r.label.clone()
                },
                r.date.clone(),
                r.amount.clone(),
                format!("{}% {}", r.confidence, r.tier),
                r.explanation.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["", "ID", "Invoice", "Date", "Amount", "Confidence", "Reason"],
            data,
        )
    );
    Ok(())
}

pub fn show<S: CandidateSource, N: NotificationSink>(
    page: &mut ReconciliationPage<S, N>,
    cfg: &Config,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = sub
        .get_one::<String>("id")
        .ok_or_else(|| anyhow!("--id is required"))?;
    page.open(id.trim())?;
    print_drawer(page, cfg, sub.get_one::<String>("find").map(String::as_str))
}
