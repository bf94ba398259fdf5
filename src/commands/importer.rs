// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::HOME_CURRENCY;
use crate::error::ImportError;
use crate::export::read_listing;
use crate::models::Transaction;
use crate::reconcile::Reconciler;
use crate::repository::{ImportRepository, SqliteRepository};
use crate::settings;
use crate::utils::{fmt_cents, open_input, pretty_table, site_arg};
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::Connection;
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let summary = import_transactions(conn, sub)?;
            if summary.dry_run {
                print_transactions(&summary.transactions);
            }
            println!(
                "{} {} transaction(s) for {} ({} new, {} updated) from {}",
                if summary.dry_run { "Reconciled" } else { "Imported" },
                summary.transactions.len(),
                summary.account_id,
                summary.created,
                summary.transactions.len() - summary.created,
                summary.path
            );
            Ok(())
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub path: String,
    pub site: String,
    pub account_id: String,
    pub created: usize,
    pub dry_run: bool,
    pub transactions: Vec<Transaction>,
}

/// Reconcile one export and, unless `--dry-run`, save it. Accounts,
/// transactions and the account's `imported_last` are written in a single
/// SQLite transaction, so any failure leaves the database untouched.
pub fn import_transactions(
    conn: &mut Connection,
    sub: &clap::ArgMatches,
) -> Result<ImportSummary> {
    let cfg = settings::load(conn)?;
    let site = site_arg(sub, &cfg.site);
    let account_id = sub.get_one::<String>("account").unwrap().trim().to_string();
    let path = sub.get_one::<String>("path").unwrap().trim().to_string();
    let dry_run = sub.get_flag("dry_run");
    let listing = match sub.get_one::<String>("accounts").map(|s| s.trim()) {
        Some(listing_path) => Some(
            read_listing(open_input(listing_path)?)
                .with_context(|| format!("Read account listing {}", listing_path))?,
        ),
        None => None,
    };
    let export = open_input(&path)?;

    let tx = conn.transaction()?;
    let (mut accounts, transactions, created) = {
        let repo = SqliteRepository::new(&tx);
        let reconciler = Reconciler::new(&repo).with_policy(cfg.conversion_policy);
        let (accounts, transactions) = match &listing {
            Some(rows) => {
                let statement = reconciler.statement(&site, rows, &account_id, export)?;
                (statement.accounts, statement.transactions)
            }
            None => {
                let account = repo.find_account(&site, &account_id)?.ok_or_else(|| {
                    ImportError::AccountNotFound {
                        site: site.clone(),
                        account_id: account_id.clone(),
                    }
                })?;
                let transactions = reconciler.transactions(&account, export)?;
                (vec![account], transactions)
            }
        };
        let mut seen = HashSet::new();
        let mut created = 0;
        for t in &transactions {
            if seen.insert(t.trans_id.clone())
                && repo.find_transaction(&t.account_key(), &t.trans_id)?.is_none()
            {
                created += 1;
            }
        }
        (accounts, transactions, created)
    };
    let summary = |transactions: Vec<Transaction>| ImportSummary {
        path: path.clone(),
        site: site.clone(),
        account_id: account_id.clone(),
        created,
        dry_run,
        transactions,
    };

    if dry_run {
        tx.rollback()?;
        return Ok(summary(transactions));
    }

    let now = Utc::now();
    {
        let mut repo = SqliteRepository::new(&tx);
        for account in accounts.iter_mut() {
            if account.account_id == account_id {
                account.mark_imported(now);
            }
            repo.upsert_account(account)?;
        }
        for t in &transactions {
            repo.upsert_transaction(t)
                .with_context(|| format!("Save transaction {}", t.trans_id))?;
        }
    }
    tx.commit()?;
    info!(%site, %account_id, count = transactions.len(), "import committed");
    Ok(summary(transactions))
}

pub(crate) fn print_transactions(transactions: &[Transaction]) {
    let rows = transactions
        .iter()
        .map(|t| {
            vec![
                t.imported_entered_date.to_string(),
                t.imported_description.clone(),
                fmt_cents(t.imported_amount, HOME_CURRENCY),
                t.imported_location.clone(),
                t.imported_original
                    .as_ref()
                    .map(|c| fmt_cents(c.amount, &c.currency))
                    .unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Date", "Description", "Amount", "Location", "Original"],
            rows
        )
    );
}
