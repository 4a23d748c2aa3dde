// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CostsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "EURO")]
    Euro,
    #[serde(rename = "ILS")]
    Ils,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Gbp, Currency::Euro, Currency::Ils];

    /// Code used as the key in rate tables and in stored records.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Euro => "EURO",
            Currency::Ils => "ILS",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Case-insensitive. `EUR` is accepted as input for [`Currency::Euro`]; the
/// stored and displayed code is always `EURO`.
impl FromStr for Currency {
    type Err = CostsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "GBP" => Ok(Currency::Gbp),
            "EURO" | "EUR" => Ok(Currency::Euro),
            "ILS" => Ok(Currency::Ils),
            other => Err(CostsError::UnknownCurrency(other.to_string())),
        }
    }
}

/// A cost as entered, before the store stamps it. `sum` is raw input and is
/// coerced to a number on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCost {
    pub sum: String,
    pub currency: Currency,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub id: i64,
    pub sum: f64, // in `currency`, exactly as entered
    pub currency: Currency,
    pub category: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportItem {
    pub sum: f64, // in the report's display currency
    pub currency: Currency,
    pub category: String,
    pub description: String,
    pub day: u32,
    pub original_sum: f64,
    pub original_currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTotal {
    pub currency: Currency,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32, // 1-12
    pub items: Vec<ReportItem>,
    pub total: ReportTotal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,
    pub currency: Currency,
    pub totals: [f64; 12], // index 0 = January
}
