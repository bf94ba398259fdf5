// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::ImportRepository;
use crate::currency::{HOME_CURRENCY, known_currencies};
use crate::error::ImportResult;
use crate::models::{Account, AccountKey, Currency, Transaction};
use std::collections::HashMap;

/// HashMap-backed repository for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    currencies: HashMap<String, Currency>,
    accounts: HashMap<AccountKey, Account>,
    transactions: HashMap<(AccountKey, String), Transaction>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with the home currency and every mapped currency.
    pub fn with_known_currencies() -> Self {
        let mut repo = Self::new();
        repo.add_currency(HOME_CURRENCY, "AUSTRALIAN DOLLAR");
        for (name, code) in known_currencies() {
            repo.add_currency(code, name);
        }
        repo
    }

    pub fn add_currency(&mut self, code: &str, name: &str) {
        self.currencies.insert(
            code.to_string(),
            Currency {
                code: code.to_string(),
                name: name.to_string(),
            },
        );
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

impl ImportRepository for MemoryRepository {
    fn find_account(&self, site: &str, account_id: &str) -> ImportResult<Option<Account>> {
        Ok(self.accounts.get(&AccountKey::new(site, account_id)).cloned())
    }

    fn find_currency(&self, code: &str) -> ImportResult<Option<Currency>> {
        Ok(self.currencies.get(code).cloned())
    }

    fn find_transaction(
        &self,
        account: &AccountKey,
        trans_id: &str,
    ) -> ImportResult<Option<Transaction>> {
        Ok(self
            .transactions
            .get(&(account.clone(), trans_id.to_string()))
            .cloned())
    }

    fn upsert_account(&mut self, account: &Account) -> ImportResult<()> {
        self.accounts.insert(account.key(), account.clone());
        Ok(())
    }

    fn upsert_transaction(&mut self, transaction: &Transaction) -> ImportResult<()> {
        self.transactions.insert(
            (transaction.account_key(), transaction.trans_id.clone()),
            transaction.clone(),
        );
        Ok(())
    }
}
