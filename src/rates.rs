// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::fx::{default_rates, RateTable};
use crate::models::Currency;
use crate::utils::http_client;

/// Parse a rate-source payload: a JSON object with a numeric (or numeric
/// string) value for every supported currency code.
pub fn parse_rates(body: &str) -> Result<RateTable> {
    let v: Value = serde_json::from_str(body).context("Rates response is not JSON")?;
    let obj = v
        .as_object()
        .ok_or_else(|| anyhow!("Rates response is not a JSON object"))?;

    let mut missing = Vec::new();
    let mut table = RateTable::new();
    for ccy in Currency::ALL {
        let rate = match obj.get(ccy.code()) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match rate {
            Some(r) if r.is_finite() => table.insert(ccy.code(), r),
            _ => missing.push(ccy.code()),
        }
    }
    if !missing.is_empty() {
        return Err(anyhow!("Rates response missing keys: {}", missing.join(", ")));
    }
    Ok(table)
}

/// Fetch rates from `url`; a blank URL means the built-in defaults.
pub fn fetch_rates(url: &str) -> Result<RateTable> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(default_rates());
    }
    let client = http_client()?;
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("Failed fetching rates from {}", url))?
        .error_for_status()
        .with_context(|| format!("Failed fetching rates from {}", url))?;
    let body = resp.text()?;
    let table = parse_rates(&body)?;
    debug!(url, "rates fetched");
    Ok(table)
}

/// Like [`fetch_rates`], but any failure yields the default rates.
pub fn rates_or_default(url: &str) -> RateTable {
    match fetch_rates(url) {
        Ok(t) => t,
        Err(err) => {
            warn!("using default rates (fetch failed): {err:#}");
            default_rates()
        }
    }
}
