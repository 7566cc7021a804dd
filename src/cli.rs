// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("recondesk")
        .about("Bank reconciliation desk: review statement lines, match them, reconcile")
        .version(clap::crate_version!())
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a recondesk.toml"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .help("JSON bank feed to load instead of the built-in statement"),
        )
        .subcommand(
            Command::new("list")
                .about("Show the transaction grid")
                .arg(Arg::new("status").long("status").help("pending|ai-match|reconciled"))
                .arg(Arg::new("search").long("search"))
                .arg(
                    Arg::new("range")
                        .long("range")
                        .help("all|last-7|last-30|last-90")
                        .default_value("last-30"),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .help("date|amount")
                        .default_value("date"),
                )
                .arg(Arg::new("asc").long("asc").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("show")
                .about("Open one transaction with its suggested matches")
                .arg(Arg::new("id").long("id").required(true))
                .arg(Arg::new("find").long("find").help("Filter suggestions by text")),
        )
        .subcommand(
            Command::new("reconcile")
                .about("Reconcile one transaction")
                .arg(Arg::new("id").long("id").required(true))
                .arg(
                    Arg::new("match")
                        .long("match")
                        .help("Candidate id; defaults to the best match"),
                )
                .arg(Arg::new("contact").long("contact").help("Create a new record instead"))
                .arg(Arg::new("account").long("account"))
                .arg(Arg::new("kind").long("kind").default_value("bill-payment"))
                .arg(Arg::new("reference").long("reference"))
                .arg(Arg::new("tax").long("tax").default_value("gst").help("gst|none"))
                .arg(Arg::new("project").long("project"))
                .arg(Arg::new("notes").long("notes")),
        )
        .subcommand(
            Command::new("bulk")
                .about("Reconcile the given transactions with their best matches")
                .arg(Arg::new("ids").long("ids").required(true)),
        )
        .subcommand(Command::new("auto").about("Run auto-reconcile rules"))
        .subcommand(
            Command::new("export")
                .about("Export selected transactions")
                .arg(Arg::new("ids").long("ids"))
                .arg(Arg::new("all").long("all").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("feed").about("Bank feed utilities").subcommand(
                Command::new("check")
                    .about("Validate a JSON feed without loading it")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(Command::new("shell").about("Interactive reconciliation session"))
}
