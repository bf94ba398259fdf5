// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use netbank_import::decoder::ConversionPolicy;
use netbank_import::settings::{self, DEFAULT_SITE};
use netbank_import::{cli, commands::config, db};
use rusqlite::Connection;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

#[test]
fn defaults_when_unset() {
    let conn = setup();
    let cfg = settings::load(&conn).unwrap();
    assert_eq!(cfg.site, DEFAULT_SITE);
    assert_eq!(cfg.conversion_policy, ConversionPolicy::Strict);
}

#[test]
fn set_policy_via_cli() {
    let conn = setup();
    let matches =
        cli::build_cli().get_matches_from(["netbank-import", "config", "set-policy", "lenient"]);
    if let Some(("config", config_m)) = matches.subcommand() {
        config::handle(&conn, config_m).unwrap();
    } else {
        panic!("no config subcommand");
    }
    let cfg = settings::load(&conn).unwrap();
    assert_eq!(cfg.conversion_policy, ConversionPolicy::Lenient);
}

#[test]
fn blank_site_is_rejected() {
    let conn = setup();
    assert!(settings::set_site(&conn, "   ").is_err());
    settings::set_site(&conn, " business ").unwrap();
    assert_eq!(settings::load(&conn).unwrap().site, "business");
}

#[test]
fn schema_seeds_reference_currencies() {
    let mut conn = setup();
    // re-running init must not duplicate seeds
    db::init_schema(&mut conn).unwrap();
    let codes: Vec<String> = {
        let mut stmt = conn.prepare("SELECT code FROM currencies ORDER BY code").unwrap();
        let codes = stmt
            .query_map([], |r| r.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        codes
    };
    for code in ["AUD", "CAD", "GBP", "USD"] {
        assert!(codes.iter().any(|c| c == code), "{} missing", code);
    }
    assert_eq!(codes.len(), 10);
}
