// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Storage seam between the reconciler and wherever records live.

mod memory;
mod sqlite;

pub use memory::MemoryRepository;
pub use sqlite::SqliteRepository;

use crate::error::ImportResult;
use crate::models::{Account, AccountKey, Currency, Transaction};

/// Lookups return `Ok(None)` for "not stored yet"; `Err` is reserved for
/// backend failures.
///
/// Callers running imports concurrently must serialize upserts per
/// (site, account_id) and per (account, trans_id).
pub trait ImportRepository {
    fn find_account(&self, site: &str, account_id: &str) -> ImportResult<Option<Account>>;

    fn find_currency(&self, code: &str) -> ImportResult<Option<Currency>>;

    fn find_transaction(
        &self,
        account: &AccountKey,
        trans_id: &str,
    ) -> ImportResult<Option<Transaction>>;

    fn upsert_account(&mut self, account: &Account) -> ImportResult<()>;

    fn upsert_transaction(&mut self, transaction: &Transaction) -> ImportResult<()>;
}
