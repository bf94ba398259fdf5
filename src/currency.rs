// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display names the bank prints next to foreign amounts, mapped to ISO 4217 codes.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Currency every NetBank account is denominated in.
pub const HOME_CURRENCY: &str = "AUD";

static CURRENCY_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("CANADIAN DOLLAR", "CAD"),
        ("US DOLLAR", "USD"),
        ("POUND STERLING", "GBP"),
        ("EURO", "EUR"),
        ("NEW ZEALAND DOLLAR", "NZD"),
        ("JAPANESE YEN", "JPY"),
        ("SINGAPORE DOLLAR", "SGD"),
        ("HONG KONG DOLLAR", "HKD"),
        ("SWISS FRANC", "CHF"),
    ])
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency '{name}'")]
pub struct UnknownCurrency {
    pub name: String,
}

/// Resolve a bank display name such as `"US DOLLAR"` to its ISO code.
///
/// Matching ignores case and runs of whitespace, since the export pads fields
/// with spaces.
pub fn code_for_name(name: &str) -> Result<&'static str, UnknownCurrency> {
    let key = normalize(name);
    CURRENCY_MAP
        .get(key.as_str())
        .copied()
        .ok_or_else(|| UnknownCurrency {
            name: name.trim().to_string(),
        })
}

/// Every (display name, code) pair, sorted by code.
pub fn known_currencies() -> Vec<(&'static str, &'static str)> {
    let mut out: Vec<_> = CURRENCY_MAP.iter().map(|(n, c)| (*n, *c)).collect();
    out.sort_by(|a, b| a.1.cmp(b.1));
    out
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
