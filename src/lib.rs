// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod error;
pub mod models;
pub mod fx;
pub mod db;
pub mod costs;
pub mod settings;
pub mod reports;
pub mod rates;
pub mod retry;
pub mod utils;
pub mod commands;

pub use db::CostsDb;
pub use error::{CostsError, Result};
