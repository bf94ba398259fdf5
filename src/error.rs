// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Errors raised while turning a NetBank export into domain records.

use thiserror::Error;

/// Why a single export or listing row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowFault {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: &'static str, found: usize },
    #[error("entered date '{0}' is not DD/MM/YYYY")]
    EnteredDate(String),
    #[error("amount '{0}' is not a signed decimal with two fractional digits")]
    Amount(String),
    #[error("description splits into {parts} parts on the conversion marker, expected 2")]
    MarkerSplit { parts: usize },
    #[error("conversion details '{0}' do not match '<amount> <currency name>'")]
    ConversionDetails(String),
}

/// Errors surfaced to the caller of an import. None of them are retried.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("line {line}: unknown currency '{name}'")]
    UnknownCurrency { line: u64, name: String },
    #[error("currency {code} is not registered")]
    CurrencyNotRegistered { code: String },
    #[error("line {line}: malformed row: {fault}")]
    MalformedRow { line: u64, fault: RowFault },
    #[error("account '{account_id}' not found for site '{site}'")]
    AccountNotFound { site: String, account_id: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for ImportError {
    fn from(err: rusqlite::Error) -> Self {
        ImportError::Storage(err.to_string())
    }
}

pub type ImportResult<T> = Result<T, ImportError>;
