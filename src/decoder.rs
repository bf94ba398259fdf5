// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Decoder for the packed description column of a NetBank export.
//!
//! The column holds a 25 character merchant description, then optional
//! location text, then optionally the marker `##1011` followed by the foreign
//! amount and currency name the bank converted from:
//!
//! ```text
//! PREMIUM TOURS LTD        LONDON  N1 0 ##1011           6.00 POUND STERLING
//! ```

use crate::currency::{UnknownCurrency, code_for_name};
use crate::error::{ImportError, RowFault};
use crate::models::Conversion;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MARKER: &str = "##1011";
pub const DESCRIPTION_WIDTH: usize = 25;
pub const HOME_REGION: &str = "Australia";

static CONVERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]*)\.([0-9]{2})\s+(\S.*)$").unwrap());

/// What to do when a marker is present but the conversion details after it
/// cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionPolicy {
    /// Fail the row, and with it the batch.
    #[default]
    Strict,
    /// Keep the location and record no conversion.
    Lenient,
}

impl fmt::Display for ConversionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionPolicy::Strict => f.write_str("strict"),
            ConversionPolicy::Lenient => f.write_str("lenient"),
        }
    }
}

impl FromStr for ConversionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ConversionPolicy::Strict),
            "lenient" => Ok(ConversionPolicy::Lenient),
            other => Err(format!(
                "unknown conversion policy '{}' (use strict|lenient)",
                other
            )),
        }
    }
}

/// Where a transaction happened, one variant per packed description shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// Nothing after the description column.
    Local,
    /// Free-text region with no marker.
    LocalWithRegion(String),
    /// Marker present with readable conversion details.
    ForeignConversion {
        location: String,
        conversion: Conversion,
    },
    /// Marker present, details unreadable. Only produced under
    /// [`ConversionPolicy::Lenient`].
    ForeignUnpriced { location: String },
}

impl Origin {
    pub fn location(&self) -> String {
        match self {
            Origin::Local => HOME_REGION.to_string(),
            Origin::LocalWithRegion(region) => format!("{}, {}", region, HOME_REGION),
            Origin::ForeignConversion { location, .. } | Origin::ForeignUnpriced { location } => {
                location.clone()
            }
        }
    }

    pub fn conversion(&self) -> Option<&Conversion> {
        match self {
            Origin::ForeignConversion { conversion, .. } => Some(conversion),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedDescription {
    pub description: String,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    UnknownCurrency(#[from] UnknownCurrency),
    #[error(transparent)]
    Malformed(RowFault),
}

impl DecodeError {
    /// Attach the export line the packed description came from.
    pub fn at_line(self, line: u64) -> ImportError {
        match self {
            DecodeError::UnknownCurrency(e) => ImportError::UnknownCurrency { line, name: e.name },
            DecodeError::Malformed(fault) => ImportError::MalformedRow { line, fault },
        }
    }
}

pub fn decode(packed: &str, policy: ConversionPolicy) -> Result<DecodedDescription, DecodeError> {
    let description: String = packed.chars().take(DESCRIPTION_WIDTH).collect();
    let extra: String = packed.chars().skip(DESCRIPTION_WIDTH).collect();
    let extra = extra.trim();

    let origin = if extra.is_empty() {
        Origin::Local
    } else if !extra.contains(MARKER) {
        Origin::LocalWithRegion(extra.to_string())
    } else {
        let parts: Vec<&str> = extra.split(MARKER).map(str::trim).collect();
        let [location, currency_info] = parts.as_slice() else {
            return Err(DecodeError::Malformed(RowFault::MarkerSplit {
                parts: parts.len(),
            }));
        };
        match parse_conversion(currency_info)? {
            Some(conversion) => Origin::ForeignConversion {
                location: location.to_string(),
                conversion,
            },
            None if policy == ConversionPolicy::Lenient => {
                tracing::warn!(
                    details = %currency_info,
                    "unreadable conversion details, keeping location only"
                );
                Origin::ForeignUnpriced {
                    location: location.to_string(),
                }
            }
            None => {
                return Err(DecodeError::Malformed(RowFault::ConversionDetails(
                    currency_info.to_string(),
                )));
            }
        }
    };

    Ok(DecodedDescription {
        description: description.trim().to_string(),
        origin,
    })
}

/// `Ok(None)` when the text does not have the `<digits>.<dd> <name>` shape.
/// An amount that has the shape but overflows is malformed under any policy.
fn parse_conversion(currency_info: &str) -> Result<Option<Conversion>, DecodeError> {
    let Some(caps) = CONVERSION_RE.captures(currency_info) else {
        return Ok(None);
    };
    let Ok(amount) = format!("{}{}", &caps[1], &caps[2]).parse::<i64>() else {
        return Err(DecodeError::Malformed(RowFault::ConversionDetails(
            currency_info.to_string(),
        )));
    };
    let currency = code_for_name(&caps[3])?;
    Ok(Some(Conversion {
        amount,
        currency: currency.to_string(),
    }))
}
