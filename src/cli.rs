// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn site_arg() -> Arg {
    Arg::new("site")
        .long("site")
        .help("Site identifier (defaults to the configured site)")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("netbank-import")
        .version(clap::crate_version!())
        .about("Reconcile CommBank NetBank CSV exports into account and transaction records")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("NETBANK_IMPORT_DB")
                .help("SQLite database path (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (-v info, -vv debug)"),
        )
        .subcommand(Command::new("init").about("Create the database and print its path"))
        .subcommand(
            Command::new("accounts")
                .about("Account listing")
                .subcommand(
                    Command::new("import")
                        .about("Reconcile a scraped account listing (5 columns, no header)")
                        .arg(Arg::new("path").long("path").required(true))
                        .arg(site_arg()),
                )
                .subcommand(
                    Command::new("list")
                        .about("List stored accounts")
                        .arg(site_arg())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("import").about("Import bank exports").subcommand(
                Command::new("transactions")
                    .about("Reconcile a transaction export for one account")
                    .arg(Arg::new("path").long("path").required(true))
                    .arg(
                        Arg::new("account")
                            .long("account")
                            .required(true)
                            .help("Account id as printed in the listing"),
                    )
                    .arg(site_arg())
                    .arg(
                        Arg::new("accounts")
                            .long("accounts")
                            .help("Account listing to reconcile first; must contain the account"),
                    )
                    .arg(
                        Arg::new("dry_run")
                            .long("dry-run")
                            .action(ArgAction::SetTrue)
                            .help("Print reconciled records without saving"),
                    ),
            ),
        )
        .subcommand(
            Command::new("tx").about("Stored transactions").subcommand(
                Command::new("list")
                    .arg(Arg::new("account").long("account").required(true))
                    .arg(site_arg())
                    .arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(i64).range(0..)),
                    )
                    .args(json_args()),
            ),
        )
        .subcommand(
            Command::new("currency")
                .about("Currency reference data")
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("code").required(true))
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(
                    Command::new("lookup")
                        .about("Resolve a bank display name, e.g. \"US DOLLAR\"")
                        .arg(Arg::new("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Importer settings")
                .subcommand(Command::new("show"))
                .subcommand(Command::new("set-site").arg(Arg::new("site").required(true)))
                .subcommand(
                    Command::new("set-policy")
                        .about("How to treat unreadable conversion details after the marker")
                        .arg(
                            Arg::new("policy")
                                .required(true)
                                .value_parser(["strict", "lenient"]),
                        ),
                ),
        )
}
