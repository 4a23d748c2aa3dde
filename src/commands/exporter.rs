// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::fx::current_rates;
use crate::db::CostsDb;
use crate::reports::build_monthly_report;
use crate::utils::{parse_currency, required};
use anyhow::{bail, Context, Result};

pub fn handle(db: &CostsDb, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => export_monthly(db, sub),
        _ => Ok(()),
    }
}

fn export_monthly(db: &CostsDb, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }
    let year = *sub.get_one::<i32>("year").context("Missing --year")?;
    let month = *sub.get_one::<u32>("month").context("Missing --month")?;
    let ccy = parse_currency(required(sub, "currency")?)?;
    let rates = current_rates(db, sub.get_flag("offline"))?;
    let report = build_monthly_report(db, year, month, ccy, Some(&rates))?;

    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
        wtr.write_record([
            "day",
            "category",
            "description",
            "sum",
            "currency",
            "original_sum",
            "original_currency",
        ])?;
        for item in &report.items {
            wtr.write_record([
                item.day.to_string(),
                item.category.clone(),
                item.description.clone(),
                item.sum.to_string(),
                item.currency.to_string(),
                item.original_sum.to_string(),
                item.original_currency.to_string(),
            ])?;
        }
        wtr.flush()?;
    } else {
        std::fs::write(out, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("Write {}", out))?;
    }
    println!("Exported {}-{:02} report to {}", year, month, out);
    Ok(())
}
