// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-driven event loop: one command per line, processed strictly in order.

use anyhow::{Result, anyhow};
use std::io::{BufRead, Write};

use crate::candidates::CandidateSource;
use crate::commands::exporter::write_csv;
use crate::commands::transactions::{TransactionRow, print_drawer, print_grid, to_row};
use crate::config::Config;
use crate::events::NotificationSink;
use crate::filter::Filter;
use crate::models::{ManualRecord, RecordKind, Status, TaxCode};
use crate::page::ReconciliationPage;
use crate::session::DrawerTab;

const HELP: &str = "\
commands:
  list [status]            show the grid, optionally one status
  select <id> | unselect <id> | all | none
  open <id>                open the reconcile drawer
  pick <candidate>         highlight a suggested match
  tab <ai|find|new>        switch drawer tab
  find <text>              search suggestions
  new <contact> <account> [reference] [kind=K] [tax=gst|none]
      [project=P] [notes=...]  use a new manual record as the match
  prev | next              move the drawer to the neighbouring row
  confirm | cancel         close the drawer
  bulk                     reconcile selected rows with their best match
  auto                     run auto-reconcile rules
  export <path.csv>        export selected rows
  quit";

pub fn run<R, S, N>(page: &mut ReconciliationPage<S, N>, cfg: &Config, input: R) -> Result<()>
where
    R: BufRead,
    S: CandidateSource,
    N: NotificationSink,
{
    println!("Bank Reconciliation - {} (type 'help')", cfg.account_label);
    prompt();
    for line in input.lines() {
        let line = line?;
        match dispatch(page, cfg, &line) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => println!("error: {}", err),
        }
        prompt();
    }
    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn nth<'a>(args: &[&'a str], i: usize, cmd: &str) -> Result<&'a str> {
    args.get(i)
        .copied()
        .ok_or_else(|| anyhow!("'{}' needs more arguments (see help)", cmd))
}

/// Parses `new` arguments. `notes=` takes the rest of the line.
pub fn manual_record_from_words(args: &[&str]) -> Result<ManualRecord> {
    let mut record = ManualRecord {
        contact: nth(args, 0, "new")?.to_string(),
        account: nth(args, 1, "new")?.to_string(),
        ..ManualRecord::default()
    };
    for (i, word) in args.iter().enumerate().skip(2) {
        let Some((key, value)) = word.split_once('=') else {
            record.reference = Some(word.to_string());
            continue;
        };
        match key {
            "ref" | "reference" => record.reference = Some(value.to_string()),
            "kind" => {
                record.kind = RecordKind::parse(value)
                    .ok_or_else(|| anyhow!("Unknown record kind '{}'", value))?;
            }
            "tax" => {
                record.tax = TaxCode::parse(value)
                    .ok_or_else(|| anyhow!("Unknown tax code '{}'", value))?;
            }
            "project" => record.project = Some(value.to_string()),
            "notes" => {
                let mut notes = vec![value];
                notes.extend_from_slice(&args[i + 1..]);
                record.notes = Some(notes.join(" "));
                break;
            }
            other => return Err(anyhow!("Unknown field '{}' for new record", other)),
        }
    }
    Ok(record)
}

/// Applies one command. Returns `false` when the loop should stop.
pub fn dispatch<S: CandidateSource, N: NotificationSink>(
    page: &mut ReconciliationPage<S, N>,
    cfg: &Config,
    line: &str,
) -> Result<bool> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Ok(true);
    };
    let args: Vec<&str> = parts.collect();
    let arg = |i: usize| nth(&args, i, cmd);

    match cmd {
        "help" | "?" => println!("{}", HELP),
        "quit" | "exit" | "q" => return Ok(false),
        "list" | "ls" => {
            let status = match args.first() {
                Some(s) => Some(Status::parse(s).ok_or_else(|| anyhow!("Unknown status '{}'", s))?),
                None => None,
            };
            let filter = Filter {
                status,
                ..Filter::default()
            };
            let rows: Vec<TransactionRow> = filter
                .apply(page.store.list(), cfg.as_of())?
                .into_iter()
                .map(|t| to_row(t, page.selection.contains(&t.id), cfg))
                .collect();
            print_grid(&rows, page.selection.size(), page.store.len());
        }
        "select" => page.toggle(arg(0)?, true)?,
        "unselect" => page.toggle(arg(0)?, false)?,
        "all" => page.select_all(true),
        "none" => page.select_all(false),
        "open" => {
            page.open(arg(0)?)?;
            print_drawer(page, cfg, None)?;
        }
        "pick" => page.pick(arg(0)?)?,
        "tab" => {
            let name = arg(0)?;
            let tab = DrawerTab::parse(name).ok_or_else(|| anyhow!("Unknown tab '{}'", name))?;
            page.session.set_tab(tab)?;
        }
        "find" => {
            page.session.set_tab(DrawerTab::FindMatch)?;
            print_drawer(page, cfg, Some(&args.join(" ")))?;
        }
        "new" => page.create_record(manual_record_from_words(&args)?)?,
        "prev" => {
            page.previous()?;
            print_drawer(page, cfg, None)?;
        }
        "next" => {
            page.next()?;
            print_drawer(page, cfg, None)?;
        }
        "confirm" => {
            let t = page.confirm()?;
            println!("{} -> {}", t.id, t.ref_id.as_deref().unwrap_or("-"));
        }
        "cancel" => page.cancel(),
        "bulk" => {
            let outcome = page.reconcile_selected()?;
            println!(
                "reconciled {}, skipped {}",
                outcome.reconciled.len(),
                outcome.skipped.len()
            );
        }
        "auto" => page.request_auto_reconcile(),
        "export" => {
            let rows = page.selected_rows();
            if rows.is_empty() {
                return Err(anyhow!("Nothing selected"));
            }
            let file = std::fs::File::create(arg(0)?)?;
            write_csv(file, &rows, cfg)?;
            println!("exported {} row(s)", rows.len());
        }
        other => return Err(anyhow!("Unknown command '{}' (see help)", other)),
    }
    Ok(true)
}
