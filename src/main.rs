// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use recondesk::candidates::StaticCandidates;
use recondesk::config::Config;
use recondesk::events::ConsoleSink;
use recondesk::page::ReconciliationPage;
use recondesk::store::TransactionStore;
use recondesk::{cli, commands, feed, fixtures};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "recondesk=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut cfg = Config::find_and_load(matches.get_one::<String>("config").map(Path::new))?;
    if let Some(data) = matches.get_one::<String>("data") {
        cfg.data = Some(PathBuf::from(data));
    }

    let rows = match &cfg.data {
        Some(path) => feed::read_feed(path, &cfg.date_format)?,
        None => fixtures::transactions(),
    };
    let store = TransactionStore::new(rows)?;
    let source = StaticCandidates::new(fixtures::candidates())?;
    let mut page = ReconciliationPage::new(store, source, ConsoleSink);

    match matches.subcommand() {
        Some(("list", sub)) => commands::transactions::list(&page, &cfg, sub)?,
        Some(("show", sub)) => commands::transactions::show(&mut page, &cfg, sub)?,
        Some(("reconcile", sub)) => {
            commands::reconcile::reconcile(&mut page, sub)?;
        }
        Some(("bulk", sub)) => {
            commands::reconcile::bulk(&mut page, sub)?;
        }
        Some(("auto", _)) => commands::reconcile::auto(&mut page),
        Some(("export", sub)) => commands::exporter::handle(&mut page, &cfg, sub)?,
        Some(("feed", sub)) => commands::feed::handle(&cfg, sub)?,
        Some(("shell", _)) => {
            let stdin = std::io::stdin();
            commands::shell::run(&mut page, &cfg, stdin.lock())?;
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
