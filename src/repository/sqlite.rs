// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::ImportRepository;
use crate::error::ImportResult;
use crate::models::{Account, AccountKey, Conversion, Currency, Transaction};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Repository over the schema created by [`crate::db::init_schema`].
///
/// Borrow a `rusqlite::Transaction` (it derefs to `Connection`) to make a
/// whole batch of upserts atomic.
pub struct SqliteRepository<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteRepository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn accounts(&self, site: Option<&str>) -> ImportResult<Vec<Account>> {
        let mut stmt = self.conn.prepare(
            "SELECT site, account_id, description, currency, imported_last FROM accounts
             WHERE ?1 IS NULL OR site=?1 ORDER BY site, account_id",
        )?;
        let rows = stmt.query_map(params![site], account_from_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn currencies(&self) -> ImportResult<Vec<Currency>> {
        let mut stmt = self
            .conn
            .prepare("SELECT code, name FROM currencies ORDER BY code")?;
        let rows = stmt.query_map([], |r| {
            Ok(Currency {
                code: r.get(0)?,
                name: r.get(1)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn add_currency(&self, currency: &Currency) -> ImportResult<()> {
        self.conn.execute(
            "INSERT INTO currencies(code, name) VALUES (?1, ?2)
             ON CONFLICT(code) DO UPDATE SET name=excluded.name",
            params![currency.code, currency.name],
        )?;
        Ok(())
    }
}

fn account_from_row(r: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        site: r.get(0)?,
        account_id: r.get(1)?,
        description: r.get(2)?,
        currency: r.get(3)?,
        imported_last: r.get(4)?,
    })
}

fn transaction_from_row(r: &Row<'_>) -> rusqlite::Result<Transaction> {
    let original_amount: Option<i64> = r.get(7)?;
    let original_currency: Option<String> = r.get(8)?;
    Ok(Transaction {
        site: r.get(0)?,
        account_id: r.get(1)?,
        trans_id: r.get(2)?,
        imported_entered_date: r.get(3)?,
        imported_description: r.get(4)?,
        imported_amount: r.get(5)?,
        imported_location: r.get(6)?,
        imported_original: original_amount
            .zip(original_currency)
            .map(|(amount, currency)| Conversion { amount, currency }),
    })
}

impl ImportRepository for SqliteRepository<'_> {
    fn find_account(&self, site: &str, account_id: &str) -> ImportResult<Option<Account>> {
        let account = self
            .conn
            .query_row(
                "SELECT site, account_id, description, currency, imported_last FROM accounts
                 WHERE site=?1 AND account_id=?2",
                params![site, account_id],
                account_from_row,
            )
            .optional()?;
        Ok(account)
    }

    fn find_currency(&self, code: &str) -> ImportResult<Option<Currency>> {
        let currency = self
            .conn
            .query_row(
                "SELECT code, name FROM currencies WHERE code=?1",
                params![code],
                |r| {
                    Ok(Currency {
                        code: r.get(0)?,
                        name: r.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(currency)
    }

    fn find_transaction(
        &self,
        account: &AccountKey,
        trans_id: &str,
    ) -> ImportResult<Option<Transaction>> {
        let transaction = self
            .conn
            .query_row(
                "SELECT site, account_id, trans_id, entered_date, description, amount, location,
                        original_amount, original_currency
                 FROM transactions WHERE site=?1 AND account_id=?2 AND trans_id=?3",
                params![account.site, account.account_id, trans_id],
                transaction_from_row,
            )
            .optional()?;
        Ok(transaction)
    }

    fn upsert_account(&mut self, account: &Account) -> ImportResult<()> {
        self.conn.execute(
            "INSERT INTO accounts(site, account_id, description, currency, imported_last)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(site, account_id) DO UPDATE SET
                description=excluded.description,
                currency=excluded.currency,
                imported_last=excluded.imported_last",
            params![
                account.site,
                account.account_id,
                account.description,
                account.currency,
                account.imported_last
            ],
        )?;
        Ok(())
    }

    fn upsert_transaction(&mut self, transaction: &Transaction) -> ImportResult<()> {
        self.conn.execute(
            "INSERT INTO transactions(site, account_id, trans_id, entered_date, description, amount,
                                      location, original_amount, original_currency)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(site, account_id, trans_id) DO UPDATE SET
                entered_date=excluded.entered_date,
                description=excluded.description,
                amount=excluded.amount,
                location=excluded.location,
                original_amount=excluded.original_amount,
                original_currency=excluded.original_currency",
            params![
                transaction.site,
                transaction.account_id,
                transaction.trans_id,
                transaction.imported_entered_date,
                transaction.imported_description,
                transaction.imported_amount,
                transaction.imported_location,
                transaction.imported_original_amount(),
                transaction.imported_original_currency()
            ],
        )?;
        Ok(())
    }
}
