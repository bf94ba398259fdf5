// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Merges parsed listing and export rows with what the repository already
//! holds. Nothing here writes; callers persist the returned records.

use crate::currency::HOME_CURRENCY;
use crate::decoder::{ConversionPolicy, decode};
use crate::error::{ImportError, ImportResult, RowFault};
use crate::export::{AccountRow, ExportRow, parse_cents, parse_entered_date, read_export};
use crate::models::{Account, Transaction};
use crate::repository::ImportRepository;
use std::collections::HashSet;
use std::io::Read;
use tracing::{debug, info, warn};

/// Accounts from a listing plus the transactions of one of them.
#[derive(Debug, Clone)]
pub struct Statement {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
}

pub struct Reconciler<'r, R: ?Sized> {
    repo: &'r R,
    policy: ConversionPolicy,
}

impl<'r, R: ImportRepository + ?Sized> Reconciler<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        Self {
            repo,
            policy: ConversionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ConversionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Existing accounts are refreshed in place, unseen ones start with
    /// `imported_last` at the epoch.
    pub fn accounts(&self, site: &str, rows: &[AccountRow]) -> ImportResult<Vec<Account>> {
        let currency = self.registered_currency(HOME_CURRENCY)?;
        let mut accounts = Vec::with_capacity(rows.len());
        for row in rows {
            let mut account = match self.repo.find_account(site, &row.account_id)? {
                Some(existing) => existing,
                None => {
                    debug!(site, account_id = %row.account_id, "new account");
                    Account::new(site, &row.account_id)
                }
            };
            account.description = row.description.clone();
            account.currency = currency.clone();
            accounts.push(account);
        }
        info!(site, count = accounts.len(), "reconciled accounts");
        Ok(accounts)
    }

    pub fn transactions<Rd: Read>(
        &self,
        account: &Account,
        export: Rd,
    ) -> ImportResult<Vec<Transaction>> {
        let rows = read_export(export)?;
        self.transaction_rows(account, &rows)
    }

    /// The first bad row fails the whole batch.
    pub fn transaction_rows(
        &self,
        account: &Account,
        rows: &[ExportRow],
    ) -> ImportResult<Vec<Transaction>> {
        let key = account.key();
        let mut seen = HashSet::new();
        let mut created = 0usize;
        let mut transactions = Vec::with_capacity(rows.len());

        for row in rows {
            let malformed = |fault: RowFault| ImportError::MalformedRow {
                line: row.line,
                fault,
            };
            let entered_date = parse_entered_date(&row.entered_date).map_err(malformed)?;
            let amount = parse_cents(&row.amount).map_err(malformed)?;
            let decoded = decode(&row.packed_description, self.policy)
                .map_err(|e| e.at_line(row.line))?;
            let original = match decoded.origin.conversion() {
                Some(conversion) => {
                    self.registered_currency(&conversion.currency)?;
                    Some(conversion.clone())
                }
                None => None,
            };

            let trans_id = row.trans_id();
            let first_sighting = seen.insert(trans_id.clone());
            if !first_sighting {
                warn!(
                    line = row.line,
                    trans_id = %trans_id,
                    "row repeats an earlier row of this export"
                );
            }
            let mut trans = match self.repo.find_transaction(&key, &trans_id)? {
                Some(existing) => existing,
                None => {
                    if first_sighting {
                        created += 1;
                    }
                    Transaction::new(&key, &trans_id)
                }
            };
            trans.imported_entered_date = entered_date;
            trans.imported_description = decoded.description;
            trans.imported_amount = amount;
            trans.imported_location = decoded.origin.location();
            trans.imported_original = original;
            transactions.push(trans);
        }

        info!(
            site = %key.site,
            account_id = %key.account_id,
            rows = transactions.len(),
            created,
            updated = transactions.len() - created,
            "reconciled transactions"
        );
        Ok(transactions)
    }

    /// Reconcile a listing, then the export of `account_id`, which must be in
    /// that listing.
    pub fn statement<Rd: Read>(
        &self,
        site: &str,
        listing: &[AccountRow],
        account_id: &str,
        export: Rd,
    ) -> ImportResult<Statement> {
        let accounts = self.accounts(site, listing)?;
        let account = accounts
            .iter()
            .find(|a| a.account_id == account_id)
            .ok_or_else(|| ImportError::AccountNotFound {
                site: site.to_string(),
                account_id: account_id.to_string(),
            })?;
        let transactions = self.transactions(account, export)?;
        Ok(Statement {
            accounts,
            transactions,
        })
    }

    fn registered_currency(&self, code: &str) -> ImportResult<String> {
        self.repo
            .find_currency(code)?
            .map(|c| c.code)
            .ok_or_else(|| ImportError::CurrencyNotRegistered {
                code: code.to_string(),
            })
    }
}
