// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::code_for_name;
use crate::models::Currency;
use crate::repository::{ImportRepository, SqliteRepository};
use crate::utils::pretty_table;
use anyhow::{Result, anyhow};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let repo = SqliteRepository::new(conn);
    match m.subcommand() {
        Some(("list", _)) => {
            let rows = repo
                .currencies()?
                .into_iter()
                .map(|c| vec![c.code, c.name])
                .collect();
            println!("{}", pretty_table(&["Code", "Name"], rows));
        }
        Some(("add", sub)) => {
            let code = sub.get_one::<String>("code").unwrap().trim().to_uppercase();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(anyhow!("Currency code '{}' must be 3 letters", code));
            }
            let name = sub.get_one::<String>("name").unwrap().trim().to_uppercase();
            repo.add_currency(&Currency {
                code: code.clone(),
                name: name.clone(),
            })?;
            println!("Added currency {} ({})", code, name);
        }
        Some(("lookup", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let code = code_for_name(name)?;
            let registered = repo.find_currency(code)?.is_some();
            println!(
                "{} -> {}{}",
                name.trim(),
                code,
                if registered { "" } else { " (not registered)" }
            );
        }
        _ => {}
    }
    Ok(())
}
