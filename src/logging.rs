// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, prelude::*};

fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Diagnostics go to stderr so stdout stays clean for tables and JSON.
pub fn setup_logging(verbosity: u8) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let filter = Targets::new()
        .with_target("rusqlite", Level::WARN)
        .with_default(level_for(verbosity));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
