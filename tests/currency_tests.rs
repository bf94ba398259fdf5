// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use netbank_import::currency::{code_for_name, known_currencies};

#[test]
fn maps_bank_display_names() {
    assert_eq!(code_for_name("CANADIAN DOLLAR").unwrap(), "CAD");
    assert_eq!(code_for_name("US DOLLAR").unwrap(), "USD");
    assert_eq!(code_for_name("POUND STERLING").unwrap(), "GBP");
}

#[test]
fn ignores_padding_and_case() {
    assert_eq!(code_for_name("  us   dollar ").unwrap(), "USD");
}

#[test]
fn unknown_name_is_an_error() {
    let err = code_for_name(" MARTIAN CREDIT ").unwrap_err();
    assert_eq!(err.name, "MARTIAN CREDIT");
    assert!(err.to_string().contains("MARTIAN CREDIT"));
}

#[test]
fn table_is_sorted_by_code() {
    let codes: Vec<&str> = known_currencies().into_iter().map(|(_, c)| c).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);
    assert!(codes.contains(&"GBP"));
}
