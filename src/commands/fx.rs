// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::costs::parse_sum;
use crate::db::CostsDb;
use crate::fx::{convert_currency, default_rates, RateTable};
use crate::rates::rates_or_default;
use crate::settings::load_rates_url;
use crate::utils::{parse_currency, pretty_table, required};
use anyhow::Result;

pub fn handle(db: &CostsDb, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("rates", sub)) => show_rates(db, sub)?,
        Some(("convert", sub)) => convert_amount(db, sub)?,
        _ => {}
    }
    Ok(())
}

/// Rates for reports: the saved source when reachable, otherwise defaults.
pub fn current_rates(db: &CostsDb, offline: bool) -> Result<RateTable> {
    if offline {
        return Ok(default_rates());
    }
    let url = load_rates_url(db)?;
    Ok(rates_or_default(&url))
}

fn show_rates(db: &CostsDb, sub: &clap::ArgMatches) -> Result<()> {
    let rates = current_rates(db, sub.get_flag("offline"))?;
    if sub.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&rates)?);
        return Ok(());
    }
    let data = rates
        .iter()
        .map(|(code, rate)| vec![code.to_string(), rate.to_string()])
        .collect();
    println!("{}", pretty_table(&["Currency", "Per USD"], data));
    Ok(())
}

fn convert_amount(db: &CostsDb, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_sum(required(sub, "amount")?)?;
    let from = parse_currency(required(sub, "from")?)?;
    let to = parse_currency(required(sub, "to")?)?;
    let rates = current_rates(db, sub.get_flag("offline"))?;
    let res = convert_currency(amount, from, to, Some(&rates));
    println!("{} {} -> {:.4} {}", amount, from, res, to);
    Ok(())
}
