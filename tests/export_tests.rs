// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use netbank_import::export::{
    AccountRow, ExportRow, parse_cents, parse_entered_date, read_export, read_listing,
};
use netbank_import::{ImportError, RowFault};

#[test]
fn cents_keep_sign_and_drop_separator() {
    assert_eq!(parse_cents("+9.23").unwrap(), 923);
    assert_eq!(parse_cents("-12.50").unwrap(), -1250);
    assert_eq!(parse_cents("0.05").unwrap(), 5);
}

#[test]
fn cents_require_two_fraction_digits() {
    for bad in ["+9.2", "-12.500", "12", "1,234.00", "+.50", "abc", ""] {
        assert_eq!(
            parse_cents(bad).unwrap_err(),
            RowFault::Amount(bad.to_string()),
            "{}",
            bad
        );
    }
}

#[test]
fn entered_date_is_day_first() {
    assert_eq!(
        parse_entered_date("18/10/2011").unwrap(),
        NaiveDate::from_ymd_opt(2011, 10, 18).unwrap()
    );
    assert!(matches!(
        parse_entered_date("2011-10-18"),
        Err(RowFault::EnteredDate(_))
    ));
    assert!(parse_entered_date("31/02/2011").is_err());
}

#[test]
fn export_rows_keep_raw_fields() {
    let csv = "18/10/2011,\"+9.23\",\"PREMIUM TOURS LTD        LONDON  N1 0 ##1011           6.00 POUND STERLING\",\"\"\n\
               19/10/2011,\"-12.50\",\"BWS LIQUOR BONDI JUNCTION\",\"\"\n";
    let rows = read_export(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 1);
    assert_eq!(rows[1].line, 2);
    assert_eq!(rows[0].amount, "+9.23");
    assert_eq!(
        rows[0].trans_id(),
        "18/10/2011|+9.23|PREMIUM TOURS LTD        LONDON  N1 0 ##1011           6.00 POUND STERLING"
    );
    assert_eq!(rows[1].packed_description, "BWS LIQUOR BONDI JUNCTION");
}

#[test]
fn trailing_columns_are_ignored_and_short_rows_rejected() {
    let rows = read_export("01/01/2020,+1.00,SHOP,,+100.00\n".as_bytes()).unwrap();
    assert_eq!(rows[0].packed_description, "SHOP");

    let err = read_export("01/01/2020,+1.00,SHOP\n02/01/2020,+1.00\n".as_bytes()).unwrap_err();
    match err {
        ImportError::MalformedRow { line, fault } => {
            assert_eq!(line, 2);
            assert_eq!(
                fault,
                RowFault::ColumnCount {
                    expected: "at least 3",
                    found: 2
                }
            );
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn trans_id_stays_distinct_when_fields_contain_pipes() {
    let row = |date: &str, amount: &str, desc: &str| ExportRow {
        line: 1,
        entered_date: date.to_string(),
        amount: amount.to_string(),
        packed_description: desc.to_string(),
    };
    let a = row("01/01/2020|+1.00", "A", "B");
    let b = row("01/01/2020", "+1.00|A", "B");
    assert_ne!(a.trans_id(), b.trans_id());
    assert_eq!(row("01/01/2020", "+1.00", "A|B").trans_id(), "01/01/2020|+1.00|A\\|B");
}

#[test]
fn listing_rows_are_trimmed() {
    let listing = " Smart Access , x, 06 2000 1234 5678 , $1.00 , $1.00 \n";
    let rows = read_listing(listing.as_bytes()).unwrap();
    assert_eq!(
        rows,
        vec![AccountRow {
            description: "Smart Access".to_string(),
            account_id: "06 2000 1234 5678".to_string(),
        }]
    );
}

#[test]
fn listing_rows_need_five_cells() {
    let err = AccountRow::from_cells(&["Smart Access", "", "062000"]).unwrap_err();
    assert_eq!(
        err,
        RowFault::ColumnCount {
            expected: "5",
            found: 3
        }
    );
}
