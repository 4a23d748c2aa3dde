// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::CostsDb;
use crate::settings::{load_rates_url, save_rates_url};
use crate::utils::required;
use anyhow::Result;

pub fn handle(db: &CostsDb, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = save_rates_url(db, required(sub, "url")?.trim())?;
            println!("Rates URL set to '{}'", url);
        }
        Some(("get-url", _)) => {
            let url = load_rates_url(db)?;
            if url.is_empty() {
                println!("No rates URL saved; default rates are used.");
            } else {
                println!("{}", url);
            }
        }
        _ => {}
    }
    Ok(())
}
