// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use std::fs::File;
use std::path::Path;

/// Render integer cents as money, e.g. `-1250` -> `"AUD -12.50"`.
pub fn fmt_cents(cents: i64, ccy: &str) -> String {
    format!("{} {}", ccy, Decimal::new(cents, 2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn open_input(path: &str) -> Result<File> {
    File::open(Path::new(path)).with_context(|| format!("Open CSV {}", path))
}

/// `--site` when given, otherwise the configured default.
pub fn site_arg(sub: &clap::ArgMatches, configured: &str) -> String {
    sub.get_one::<String>("site")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(configured)
        .to_string()
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
