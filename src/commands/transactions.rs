// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings;
use crate::utils::{maybe_print_json, pretty_table, site_arg};
use anyhow::Result;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        list(conn, sub)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TxRow {
    pub date: String,
    pub description: String,
    pub amount: Decimal,
    pub location: String,
    pub original_amount: Option<Decimal>,
    pub original_currency: Option<String>,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                let original = match (&r.original_amount, &r.original_currency) {
                    (Some(a), Some(c)) => format!("{} {}", c, a),
                    _ => String::new(),
                };
                vec![
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.to_string(),
                    r.location.clone(),
                    original,
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
    Ok(())
}

/// Newest first; `--limit` caps the row count.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TxRow>> {
    let cfg = settings::load(conn)?;
    let site = site_arg(sub, &cfg.site);
    let account_id = sub.get_one::<String>("account").unwrap().trim();
    // SQLite reads a negative LIMIT as unbounded
    let limit = sub.get_one::<i64>("limit").copied().unwrap_or(-1);

    let mut stmt = conn.prepare(
        "SELECT entered_date, description, amount, location, original_amount, original_currency
         FROM transactions WHERE site=?1 AND account_id=?2
         ORDER BY entered_date DESC, trans_id LIMIT ?3",
    )?;
    let rows = stmt.query_map(params![site, account_id, limit], |r| {
        Ok(TxRow {
            date: r.get(0)?,
            description: r.get(1)?,
            amount: Decimal::new(r.get(2)?, 2),
            location: r.get(3)?,
            original_amount: r.get::<_, Option<i64>>(4)?.map(|c| Decimal::new(c, 2)),
            original_currency: r.get(5)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
