// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use serde_json::json;
use std::io::Write;

use crate::candidates::CandidateSource;
use crate::config::Config;
use crate::events::NotificationSink;
use crate::models::Transaction;
use crate::page::ReconciliationPage;
use crate::utils::split_ids;

const HEADERS: [&str; 8] = [
    "id",
    "date",
    "description",
    "ref_id",
    "status",
    "confidence",
    "amount",
    "type",
];

fn record(t: &Transaction, cfg: &Config) -> [String; 8] {
    [
        t.id.clone(),
        t.date.format(&cfg.date_format).to_string(),
        t.description.clone(),
        t.ref_id.clone().unwrap_or_default(),
        t.status.to_string(),
        t.confidence.map(|c| c.to_string()).unwrap_or_default(),
        t.amount.to_string(),
        t.r#type.short().to_string(),
    ]
}

/// Writes rows as CSV with a header line.
pub fn write_csv<W: Write>(out: W, rows: &[&Transaction], cfg: &Config) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(HEADERS)?;
    for t in rows {
        wtr.write_record(record(t, cfg))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn handle<S: CandidateSource, N: NotificationSink>(
    page: &mut ReconciliationPage<S, N>,
    cfg: &Config,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub
        .get_one::<String>("out")
        .ok_or_else(|| anyhow!("--out is required"))?;

    if sub.get_flag("all") {
        page.select_all(true);
    } else if let Some(raw) = sub.get_one::<String>("ids") {
        for id in split_ids(raw) {
            page.toggle(&id, true)?;
        }
    }
    let rows = page.selected_rows();
    if rows.is_empty() {
        return Err(anyhow!("Nothing selected; pass --ids or --all"));
    }

    match fmt.as_str() {
        "csv" => {
            let file = std::fs::File::create(out)?;
            write_csv(file, &rows, cfg)?;
        }
        "json" => {
            let items: Vec<_> = rows
                .iter()
                .map(|t| {
                    let r = record(t, cfg);
                    json!({
                        "id": r[0], "date": r[1], "description": r[2], "refId": t.ref_id,
                        "status": r[4], "confidence": t.confidence, "amount": r[6], "type": r[7]
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    println!("Exported {} transaction(s) to {}", rows.len(), out);
    Ok(())
}
