// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::costs::parse_sum;
use crate::models::NewCost;

const UA: &str = concat!(
    "costbook/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/costbook)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Form-level checks applied before a cost reaches the store: the sum must
/// be a positive number and the description must not be blank.
pub fn validate_candidate(cost: &NewCost) -> Result<()> {
    let sum = parse_sum(&cost.sum).context("Please provide a positive sum")?;
    if sum <= 0.0 {
        bail!("Please provide a positive sum (got {})", cost.sum.trim());
    }
    if cost.description.trim().is_empty() {
        bail!("Description must not be empty");
    }
    Ok(())
}

pub fn fmt_money(amount: f64, ccy: &str) -> String {
    format!("{} {:.2}", ccy, amount)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Value of a required string argument.
pub fn required<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    m.get_one::<String>(name)
        .map(|s| s.as_str())
        .with_context(|| format!("Missing required argument '--{}'", name))
}

/// Parse a currency argument (case-insensitive, `EUR` accepted for `EURO`).
pub fn parse_currency(s: &str) -> Result<crate::models::Currency> {
    Ok(s.parse()?)
}
