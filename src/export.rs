// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Row-level reading of the two inputs handed over by the browser layer:
//! the transaction export and the scraped account listing.

use crate::error::{ImportError, ImportResult, RowFault};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?)([0-9]+)\.([0-9]{2})$").unwrap());

/// One row of a transaction export, fields kept exactly as the bank wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub line: u64,
    pub entered_date: String,
    pub amount: String,
    pub packed_description: String,
}

impl ExportRow {
    fn from_record(record: &StringRecord) -> ImportResult<Self> {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if record.len() < 3 {
            return Err(ImportError::MalformedRow {
                line,
                fault: RowFault::ColumnCount {
                    expected: "at least 3",
                    found: record.len(),
                },
            });
        }
        Ok(Self {
            line,
            entered_date: record[0].to_string(),
            amount: record[1].to_string(),
            packed_description: record[2].to_string(),
        })
    }

    /// Stable identity for re-imports of this exact row.
    pub fn trans_id(&self) -> String {
        [&self.entered_date, &self.amount, &self.packed_description]
            .iter()
            .map(|f| f.replace('\\', "\\\\").replace('|', "\\|"))
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// One row of the account listing: description, (ignored), account id, balance, funds.
/// Only the description and account id are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub description: String,
    pub account_id: String,
}

impl AccountRow {
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Result<Self, RowFault> {
        let cells: Vec<&str> = cells.iter().map(|c| c.as_ref().trim()).collect();
        match cells.as_slice() {
            [description, _, account_id, _, _] => Ok(Self {
                description: description.to_string(),
                account_id: account_id.to_string(),
            }),
            _ => Err(RowFault::ColumnCount {
                expected: "5",
                found: cells.len(),
            }),
        }
    }
}

/// Read a headerless NetBank CSV export. Columns past the third are ignored.
pub fn read_export<R: Read>(rdr: R) -> ImportResult<Vec<ExportRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(rdr);
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(ExportRow::from_record(&record)?);
    }
    Ok(rows)
}

/// Read a headerless account listing saved as CSV.
pub fn read_listing<R: Read>(rdr: R) -> ImportResult<Vec<AccountRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let cells: Vec<&str> = record.iter().collect();
        let row = AccountRow::from_cells(&cells)
            .map_err(|fault| ImportError::MalformedRow { line, fault })?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn parse_entered_date(s: &str) -> Result<NaiveDate, RowFault> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y")
        .map_err(|_| RowFault::EnteredDate(s.to_string()))
}

/// `"+9.23"` -> `923`, `"-12.50"` -> `-1250`. Exactly two fractional digits.
pub fn parse_cents(s: &str) -> Result<i64, RowFault> {
    let fault = || RowFault::Amount(s.to_string());
    let caps = AMOUNT_RE.captures(s.trim()).ok_or_else(fault)?;
    let magnitude: i64 = format!("{}{}", &caps[2], &caps[3])
        .parse()
        .map_err(|_| fault())?;
    Ok(if &caps[1] == "-" { -magnitude } else { magnitude })
}
