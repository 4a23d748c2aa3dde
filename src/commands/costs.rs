// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::costs::{all_costs, insert};
use crate::db::CostsDb;
use crate::error::CostsError;
use crate::models::NewCost;
use crate::retry::with_reopen_retry;
use crate::utils::{maybe_print_json, parse_currency, pretty_table, required, validate_candidate};
use anyhow::Result;
use std::path::PathBuf;

pub fn handle(db: &mut CostsDb, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(db, sub)?,
        Some(("list", sub)) => list(db, sub)?,
        _ => {}
    }
    Ok(())
}

fn reopen(path: Option<PathBuf>) -> crate::Result<CostsDb> {
    match path {
        Some(p) => CostsDb::open(p),
        None => Err(CostsError::StoreUnavailable {
            reason: "an in-memory store cannot be reopened".into(),
            source: None,
        }),
    }
}

pub fn add(db: &mut CostsDb, sub: &clap::ArgMatches) -> Result<()> {
    let cost = NewCost {
        sum: required(sub, "sum")?.trim().to_string(),
        currency: parse_currency(required(sub, "currency")?)?,
        category: required(sub, "category")?.trim().to_string(),
        description: required(sub, "description")?.trim().to_string(),
    };
    validate_candidate(&cost)?;

    let path = db.path().map(|p| p.to_path_buf());
    let rec = with_reopen_retry(db, || reopen(path), |db| insert(db, &cost))?;
    if sub.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        println!(
            "Recorded {} {} for '{}' ({}) on {}",
            rec.currency,
            rec.sum,
            rec.description,
            rec.category,
            rec.date.format("%Y-%m-%d")
        );
    }
    Ok(())
}

fn list(db: &CostsDb, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = all_costs(db)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.date.format("%Y-%m-%d %H:%M").to_string(),
                    format!("{:.2}", c.sum),
                    c.currency.to_string(),
                    c.category.clone(),
                    c.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Sum", "CCY", "Category", "Description"], rows)
        );
    }
    Ok(())
}
