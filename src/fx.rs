// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Currency;

/// Value of one USD in each currency, keyed by currency code. `USD` maps to 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(BTreeMap<String, f64>);

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: &str, rate: f64) -> Self {
        self.insert(code, rate);
        self
    }

    pub fn insert(&mut self, code: &str, rate: f64) {
        self.0.insert(code.to_string(), rate);
    }

    /// Usable rate for `code`. Zero and non-finite values count as missing.
    pub fn get(&self, code: &str) -> Option<f64> {
        self.0
            .get(code)
            .copied()
            .filter(|r| r.is_finite() && *r != 0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl From<BTreeMap<String, f64>> for RateTable {
    fn from(m: BTreeMap<String, f64>) -> Self {
        Self(m)
    }
}

/// Rates used when no rate source is configured or reachable.
pub fn default_rates() -> RateTable {
    RateTable::new()
        .with("USD", 1.0)
        .with("GBP", 0.6)
        .with("EURO", 0.7)
        .with("ILS", 3.4)
}

/// Convert `amount` from `from` to `to` through USD.
/// Without a table, or without a usable rate for either code, the amount is
/// returned unchanged. No rounding is applied.
pub fn convert(amount: f64, from: &str, to: &str, rates: Option<&RateTable>) -> f64 {
    if from == to {
        return amount;
    }
    let Some(rates) = rates else {
        return amount;
    };
    match (rates.get(from), rates.get(to)) {
        (Some(r_from), Some(r_to)) => amount / r_from * r_to,
        _ => amount,
    }
}

pub fn convert_currency(amount: f64, from: Currency, to: Currency, rates: Option<&RateTable>) -> f64 {
    convert(amount, from.code(), to.code(), rates)
}
