// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;

use netbank_import::{cli, commands, db, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::setup_logging(matches.get_count("verbose"));

    let mut conn = match matches.get_one::<String>("db") {
        Some(path) => db::open_at(Path::new(path))?,
        None => db::open_or_init()?,
    };

    match matches.subcommand() {
        Some(("init", _)) => match matches.get_one::<String>("db") {
            Some(path) => println!("Database initialized at {}", path),
            None => println!("Database initialized at {}", db::db_path()?.display()),
        },
        Some(("accounts", sub)) => commands::accounts::handle(&mut conn, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut conn, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&conn, sub)?,
        Some(("currency", sub)) => commands::currencies::handle(&conn, sub)?,
        Some(("config", sub)) => commands::config::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
