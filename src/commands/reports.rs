// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::fx::current_rates;
use crate::db::CostsDb;
use crate::reports::{build_monthly_report, build_yearly_summary};
use crate::utils::{fmt_money, maybe_print_json, parse_currency, pretty_table, required};
use anyhow::{Context, Result};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn handle(db: &CostsDb, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(db, sub)?,
        Some(("yearly", sub)) => yearly(db, sub)?,
        _ => {}
    }
    Ok(())
}

fn monthly(db: &CostsDb, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = *sub.get_one::<i32>("year").context("Missing --year")?;
    let month = *sub.get_one::<u32>("month").context("Missing --month")?;
    let ccy = parse_currency(required(sub, "currency")?)?;
    let rates = current_rates(db, sub.get_flag("offline"))?;
    let report = build_monthly_report(db, year, month, ccy, Some(&rates))?;

    if sub.get_flag("by-category") {
        let by_cat = report.by_category();
        if !maybe_print_json(json_flag, jsonl_flag, &by_cat)? {
            let data = by_cat
                .into_iter()
                .map(|(cat, amt)| vec![cat, format!("{:.2}", amt)])
                .collect();
            let hdr = format!("Spent ({})", ccy);
            println!("{}", pretty_table(&["Category", &hdr], data));
        }
        return Ok(());
    }

    if json_flag {
        maybe_print_json(true, false, &report)?;
        return Ok(());
    }
    if jsonl_flag {
        maybe_print_json(false, true, &report.items)?;
        return Ok(());
    }
    let data = report
        .items
        .iter()
        .map(|i| {
            vec![
                i.day.to_string(),
                i.category.clone(),
                i.description.clone(),
                format!("{:.2}", i.sum),
                fmt_money(i.original_sum, i.original_currency.code()),
            ]
        })
        .collect();
    let hdr = format!("Sum ({})", ccy);
    println!(
        "{}",
        pretty_table(&["Day", "Category", "Description", &hdr, "Entered"], data)
    );
    println!(
        "Total {}-{:02}: {}",
        year,
        month,
        fmt_money(report.total.total, report.total.currency.code())
    );
    Ok(())
}

fn yearly(db: &CostsDb, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = *sub.get_one::<i32>("year").context("Missing --year")?;
    let ccy = parse_currency(required(sub, "currency")?)?;
    let rates = current_rates(db, sub.get_flag("offline"))?;
    let summary = build_yearly_summary(db, year, ccy, Some(&rates))?;

    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let data = MONTHS
            .iter()
            .zip(summary.totals.iter())
            .map(|(m, t)| vec![m.to_string(), format!("{:.2}", t)])
            .collect();
        let hdr = format!("Spent ({})", ccy);
        println!("{}", pretty_table(&["Month", &hdr], data));
        println!("Total {}: {}", year, fmt_money(summary.total(), ccy.code()));
    }
    Ok(())
}
