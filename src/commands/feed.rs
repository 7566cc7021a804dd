// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use std::path::Path;

use crate::config::Config;
use crate::feed::read_feed;
use crate::models::Status;
use crate::utils::pretty_table;

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("check", sub)) => check(cfg, sub),
        _ => Ok(()),
    }
}

fn check(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub
        .get_one::<String>("path")
        .ok_or_else(|| anyhow!("--path is required"))?;
    let rows = read_feed(Path::new(path.trim()), &cfg.date_format)?;

    let count = |s: Status| rows.iter().filter(|t| t.status == s).count();
    println!(
        "{}",
        pretty_table(
            &["Status", "Rows"],
            vec![
                vec!["pending".into(), count(Status::Pending).to_string()],
                vec!["ai-match".into(), count(Status::AiMatch).to_string()],
                vec!["reconciled".into(), count(Status::Reconciled).to_string()],
            ],
        )
    );
    println!("feed ok: {} transaction(s)", rows.len());
    Ok(())
}
