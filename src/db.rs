// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::{HOME_CURRENCY, known_currencies};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, params};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "NetbankImport", "netbank-import"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("netbank-import.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    open_at(&db_path()?)
}

pub fn open_at(path: &Path) -> Result<Connection> {
    let mut conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS currencies(
        code TEXT PRIMARY KEY,
        name TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS accounts(
        site TEXT NOT NULL,
        account_id TEXT NOT NULL,
        description TEXT NOT NULL,
        currency TEXT NOT NULL,
        imported_last TEXT NOT NULL,
        PRIMARY KEY(site, account_id),
        FOREIGN KEY(currency) REFERENCES currencies(code)
    );

    -- amounts in integer cents
    CREATE TABLE IF NOT EXISTS transactions(
        site TEXT NOT NULL,
        account_id TEXT NOT NULL,
        trans_id TEXT NOT NULL,
        entered_date TEXT NOT NULL,
        description TEXT NOT NULL,
        amount INTEGER NOT NULL,
        location TEXT NOT NULL,
        original_amount INTEGER,
        original_currency TEXT,
        PRIMARY KEY(site, account_id, trans_id),
        FOREIGN KEY(site, account_id) REFERENCES accounts(site, account_id) ON DELETE CASCADE,
        FOREIGN KEY(original_currency) REFERENCES currencies(code),
        CHECK((original_amount IS NULL) = (original_currency IS NULL))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(entered_date);
    "#,
    )?;
    seed_currencies(conn)?;
    Ok(())
}

fn seed_currencies(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare("INSERT OR IGNORE INTO currencies(code, name) VALUES (?1, ?2)")?;
        stmt.execute(params![HOME_CURRENCY, "AUSTRALIAN DOLLAR"])?;
        for (name, code) in known_currencies() {
            stmt.execute(params![code, name])?;
        }
    }
    tx.commit()?;
    Ok(())
}
