// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::export::read_listing;
use crate::models::Account;
use crate::reconcile::Reconciler;
use crate::repository::{ImportRepository, SqliteRepository};
use crate::settings;
use crate::utils::{maybe_print_json, open_input, pretty_table, site_arg};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("import", sub)) => {
            let accounts = import_listing(conn, sub)?;
            println!("Reconciled {} account(s)", accounts.len());
            print_accounts(&accounts);
        }
        Some(("list", sub)) => {
            let site = sub.get_one::<String>("site").map(|s| s.trim());
            let accounts = SqliteRepository::new(conn).accounts(site)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &accounts)? {
                print_accounts(&accounts);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Reconcile and save every account of a listing file in one transaction.
pub fn import_listing(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<Vec<Account>> {
    let cfg = settings::load(conn)?;
    let site = site_arg(sub, &cfg.site);
    let path = sub.get_one::<String>("path").unwrap().trim();
    let rows = read_listing(open_input(path)?)
        .with_context(|| format!("Read account listing {}", path))?;

    let tx = conn.transaction()?;
    let accounts = {
        let mut repo = SqliteRepository::new(&tx);
        let accounts = Reconciler::new(&repo).accounts(&site, &rows)?;
        for account in &accounts {
            repo.upsert_account(account)?;
        }
        accounts
    };
    tx.commit()?;
    Ok(accounts)
}

pub(crate) fn print_accounts(accounts: &[Account]) {
    let rows = accounts
        .iter()
        .map(|a| {
            vec![
                a.site.clone(),
                a.account_id.clone(),
                a.description.clone(),
                a.currency.clone(),
                a.imported_last.to_rfc3339(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Site", "Account", "Description", "Currency", "Imported"],
            rows
        )
    );
}
