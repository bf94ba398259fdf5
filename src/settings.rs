// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::decoder::ConversionPolicy;
use anyhow::{Result, anyhow};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

pub const DEFAULT_SITE: &str = "commbank";

/// Persistent importer settings, stored in the `settings` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSettings {
    pub site: String,
    pub conversion_policy: ConversionPolicy,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            site: DEFAULT_SITE.to_string(),
            conversion_policy: ConversionPolicy::default(),
        }
    }
}

pub fn load(conn: &Connection) -> Result<ImportSettings> {
    let mut settings = ImportSettings::default();
    if let Some(site) = get(conn, "site")? {
        settings.site = site;
    }
    if let Some(policy) = get(conn, "conversion_policy")? {
        settings.conversion_policy = policy
            .parse()
            .map_err(|e: String| anyhow!("settings.conversion_policy: {}", e))?;
    }
    Ok(settings)
}

pub fn set_site(conn: &Connection, site: &str) -> Result<()> {
    let site = site.trim();
    if site.is_empty() {
        return Err(anyhow!("Site cannot be empty"));
    }
    set(conn, "site", site)
}

pub fn set_conversion_policy(conn: &Connection, policy: ConversionPolicy) -> Result<()> {
    set(conn, "conversion_policy", &policy.to_string())
}

fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}
