// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly and yearly reports over the cost store.
//!
//! Nothing is cached: every call runs a fresh scan and converts each record
//! into the display currency. Records are bucketed by the calendar date of
//! their timestamp in the user's local time zone; the `_in` variants take an
//! explicit zone.

use chrono::{Datelike, Local, TimeZone};
use std::collections::BTreeMap;

use crate::costs::scan_all;
use crate::db::CostsDb;
use crate::error::{CostsError, Result};
use crate::fx::{convert_currency, default_rates, RateTable};
use crate::models::{Currency, MonthlyReport, ReportItem, ReportTotal, YearlySummary};

/// Itemized costs for one local calendar month (`month` is 1-12). Item sums
/// are converted into `currency`; `total` is their sum in scan order.
/// Without a rate table the default rates are used.
pub fn build_monthly_report(
    db: &CostsDb,
    year: i32,
    month: u32,
    currency: Currency,
    rates: Option<&RateTable>,
) -> Result<MonthlyReport> {
    build_monthly_report_in(db, &Local, year, month, currency, rates)
}

/// [`build_monthly_report`] with months and days taken in `tz`.
pub fn build_monthly_report_in<Tz: TimeZone>(
    db: &CostsDb,
    tz: &Tz,
    year: i32,
    month: u32,
    currency: Currency,
    rates: Option<&RateTable>,
) -> Result<MonthlyReport> {
    if !(1..=12).contains(&month) {
        return Err(CostsError::InvalidMonth(month));
    }
    let defaults;
    let rates = match rates {
        Some(r) => r,
        None => {
            defaults = default_rates();
            &defaults
        }
    };

    let mut items = Vec::new();
    let mut total = 0.0;
    scan_all(db, |cost| {
        let date = cost.date.with_timezone(tz);
        if date.year() != year || date.month() != month {
            return;
        }
        let sum = convert_currency(cost.sum, cost.currency, currency, Some(rates));
        total += sum;
        items.push(ReportItem {
            sum,
            currency,
            category: cost.category,
            description: cost.description,
            day: date.day(),
            original_sum: cost.sum,
            original_currency: cost.currency,
        });
    })?;

    Ok(MonthlyReport {
        year,
        month,
        items,
        total: ReportTotal { currency, total },
    })
}

/// Per-month totals for local calendar `year` in `currency`; months without
/// costs stay 0.
pub fn build_yearly_summary(
    db: &CostsDb,
    year: i32,
    currency: Currency,
    rates: Option<&RateTable>,
) -> Result<YearlySummary> {
    build_yearly_summary_in(db, &Local, year, currency, rates)
}

pub fn build_yearly_summary_in<Tz: TimeZone>(
    db: &CostsDb,
    tz: &Tz,
    year: i32,
    currency: Currency,
    rates: Option<&RateTable>,
) -> Result<YearlySummary> {
    let defaults;
    let rates = match rates {
        Some(r) => r,
        None => {
            defaults = default_rates();
            &defaults
        }
    };

    let mut totals = [0.0; 12];
    scan_all(db, |cost| {
        let date = cost.date.with_timezone(tz);
        if date.year() == year {
            totals[date.month0() as usize] +=
                convert_currency(cost.sum, cost.currency, currency, Some(rates));
        }
    })?;

    Ok(YearlySummary {
        year,
        currency,
        totals,
    })
}

impl MonthlyReport {
    /// Converted spend per category, largest first.
    pub fn by_category(&self) -> Vec<(String, f64)> {
        let mut agg: BTreeMap<&str, f64> = BTreeMap::new();
        for item in &self.items {
            *agg.entry(item.category.as_str()).or_insert(0.0) += item.sum;
        }
        let mut out: Vec<(String, f64)> =
            agg.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }
}

impl YearlySummary {
    pub fn total(&self) -> f64 {
        self.totals.iter().sum()
    }
}
