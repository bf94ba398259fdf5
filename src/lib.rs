// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod currency;
pub mod db;
pub mod decoder;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reconcile;
pub mod repository;
pub mod settings;
pub mod utils;

pub use error::{ImportError, ImportResult, RowFault};
pub use reconcile::{Reconciler, Statement};
pub use repository::{ImportRepository, MemoryRepository, SqliteRepository};
