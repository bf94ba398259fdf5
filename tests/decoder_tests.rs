// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use netbank_import::RowFault;
use netbank_import::decoder::{ConversionPolicy, DecodeError, Origin, decode};
use netbank_import::models::Conversion;

const LONDON: &str =
    "PREMIUM TOURS LTD        LONDON  N1 0 ##1011           6.00 POUND STERLING";

#[test]
fn foreign_conversion_is_extracted() {
    let d = decode(LONDON, ConversionPolicy::Strict).unwrap();
    assert_eq!(d.description, "PREMIUM TOURS LTD");
    assert_eq!(
        d.origin,
        Origin::ForeignConversion {
            location: "LONDON  N1 0".to_string(),
            conversion: Conversion {
                amount: 600,
                currency: "GBP".to_string(),
            },
        }
    );
    assert_eq!(d.origin.location(), "LONDON  N1 0");
    assert_eq!(d.origin.conversion().unwrap().amount, 600);
}

#[test]
fn short_description_is_local() {
    let d = decode("BWS LIQUOR BONDI JUNCTION", ConversionPolicy::Strict).unwrap();
    assert_eq!(d.description, "BWS LIQUOR BONDI JUNCTION");
    assert_eq!(d.origin, Origin::Local);
    assert_eq!(d.origin.location(), "Australia");
    assert!(d.origin.conversion().is_none());
}

#[test]
fn region_without_marker_is_annotated() {
    let d = decode("WOOLWORTHS 1234          SYDNEY NS", ConversionPolicy::Strict).unwrap();
    assert_eq!(d.description, "WOOLWORTHS 1234");
    assert_eq!(d.origin, Origin::LocalWithRegion("SYDNEY NS".to_string()));
    assert_eq!(d.origin.location(), "SYDNEY NS, Australia");
}

#[test]
fn description_is_first_25_chars_trimmed() {
    let d = decode(
        "ABCDEFGHIJKLMNOPQRSTUVWXYTRAILING TEXT",
        ConversionPolicy::Strict,
    )
    .unwrap();
    assert_eq!(d.description, "ABCDEFGHIJKLMNOPQRSTUVWXY");
    assert_eq!(d.origin.location(), "TRAILING TEXT, Australia");
}

#[test]
fn width_counts_characters_not_bytes() {
    let d = decode("CAFÉ ÉCLAIR ÉTOILE SYDNEYX MELBOURNE", ConversionPolicy::Strict).unwrap();
    assert_eq!(d.description, "CAFÉ ÉCLAIR ÉTOILE SYDNEY");
    assert_eq!(d.origin.location(), "X MELBOURNE, Australia");
}

#[test]
fn unknown_currency_fails() {
    let packed = "SHOP                     TOKYO ##1011 120.00 MARTIAN CREDIT";
    let err = decode(packed, ConversionPolicy::Lenient).unwrap_err();
    match err {
        DecodeError::UnknownCurrency(e) => assert_eq!(e.name, "MARTIAN CREDIT"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn two_markers_is_malformed_under_any_policy() {
    let packed = "SHOP                     A ##1011 B ##1011 1.00 US DOLLAR";
    for policy in [ConversionPolicy::Strict, ConversionPolicy::Lenient] {
        assert_eq!(
            decode(packed, policy).unwrap_err(),
            DecodeError::Malformed(RowFault::MarkerSplit { parts: 3 })
        );
    }
}

#[test]
fn unreadable_details_fail_when_strict() {
    let packed = "SHOP                     NEW YORK ##1011 ABOUT TEN US DOLLAR";
    assert_eq!(
        decode(packed, ConversionPolicy::Strict).unwrap_err(),
        DecodeError::Malformed(RowFault::ConversionDetails(
            "ABOUT TEN US DOLLAR".to_string()
        ))
    );
}

#[test]
fn unreadable_details_keep_location_when_lenient() {
    let packed = "SHOP                     NEW YORK ##1011 6.0 US DOLLAR";
    let d = decode(packed, ConversionPolicy::Lenient).unwrap();
    assert_eq!(
        d.origin,
        Origin::ForeignUnpriced {
            location: "NEW YORK".to_string()
        }
    );
    assert!(d.origin.conversion().is_none());
}

#[test]
fn multi_word_currency_and_large_amount() {
    let packed = "AIRLINE                  VANCOUVER BC ##1011 1234.56 CANADIAN DOLLAR";
    let d = decode(packed, ConversionPolicy::Strict).unwrap();
    let c = d.origin.conversion().unwrap();
    assert_eq!(c.amount, 123456);
    assert_eq!(c.currency, "CAD");
}

#[test]
fn policy_parses_from_text() {
    assert_eq!("Lenient".parse::<ConversionPolicy>().unwrap(), ConversionPolicy::Lenient);
    assert_eq!(ConversionPolicy::default(), ConversionPolicy::Strict);
    assert!("loose".parse::<ConversionPolicy>().is_err());
}

#[test]
fn overflowing_conversion_amount_is_malformed_under_any_policy() {
    let packed = "SHOP                     NYC ##1011 99999999999999999999.00 US DOLLAR";
    for policy in [ConversionPolicy::Strict, ConversionPolicy::Lenient] {
        assert_eq!(
            decode(packed, policy).unwrap_err(),
            DecodeError::Malformed(RowFault::ConversionDetails(
                "99999999999999999999.00 US DOLLAR".to_string()
            ))
        );
    }
}
