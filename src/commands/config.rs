// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::decoder::ConversionPolicy;
use crate::settings;
use crate::utils::pretty_table;
use anyhow::{Result, anyhow};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let cfg = settings::load(conn)?;
            let rows = vec![
                vec!["site".to_string(), cfg.site],
                vec![
                    "conversion_policy".to_string(),
                    cfg.conversion_policy.to_string(),
                ],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set-site", sub)) => {
            let site = sub.get_one::<String>("site").unwrap();
            settings::set_site(conn, site)?;
            println!("Default site set to {}", site.trim());
        }
        Some(("set-policy", sub)) => {
            let policy: ConversionPolicy = sub
                .get_one::<String>("policy")
                .unwrap()
                .parse()
                .map_err(|e: String| anyhow!(e))?;
            settings::set_conversion_policy(conn, policy)?;
            println!("Conversion policy set to {}", policy);
        }
        _ => {}
    }
    Ok(())
}
