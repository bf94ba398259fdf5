// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identity of an account: unique per (site, account_id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountKey {
    pub site: String,
    pub account_id: String,
}

impl AccountKey {
    pub fn new(site: &str, account_id: &str) -> Self {
        Self {
            site: site.to_string(),
            account_id: account_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub site: String,
    pub account_id: String,
    pub description: String,
    pub currency: String,
    pub imported_last: DateTime<Utc>,
}

impl Account {
    /// A never-imported account. `imported_last` starts at the epoch.
    pub fn new(site: &str, account_id: &str) -> Self {
        Self {
            site: site.to_string(),
            account_id: account_id.to_string(),
            description: String::new(),
            currency: String::new(),
            imported_last: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    pub fn key(&self) -> AccountKey {
        AccountKey::new(&self.site, &self.account_id)
    }

    pub fn mark_imported(&mut self, at: DateTime<Utc>) {
        self.imported_last = at;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

/// Foreign amount the bank converted from. Amount and currency travel together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub amount: i64, // cents
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub site: String,
    pub account_id: String,
    pub trans_id: String,
    pub imported_entered_date: NaiveDate,
    pub imported_description: String,
    pub imported_amount: i64, // cents
    pub imported_location: String,
    pub imported_original: Option<Conversion>,
}

impl Transaction {
    pub fn new(account: &AccountKey, trans_id: &str) -> Self {
        Self {
            site: account.site.clone(),
            account_id: account.account_id.clone(),
            trans_id: trans_id.to_string(),
            imported_entered_date: DateTime::<Utc>::UNIX_EPOCH.date_naive(),
            imported_description: String::new(),
            imported_amount: 0,
            imported_location: String::new(),
            imported_original: None,
        }
    }

    pub fn account_key(&self) -> AccountKey {
        AccountKey::new(&self.site, &self.account_id)
    }

    pub fn imported_original_amount(&self) -> Option<i64> {
        self.imported_original.as_ref().map(|c| c.amount)
    }

    pub fn imported_original_currency(&self) -> Option<&str> {
        self.imported_original.as_ref().map(|c| c.currency.as_str())
    }
}
