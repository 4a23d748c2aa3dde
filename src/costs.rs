// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Row};
use tracing::debug;

use crate::db::CostsDb;
use crate::error::{CostsError, Result};
use crate::models::{CostRecord, Currency, NewCost};

impl ToSql for Currency {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for Currency {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: CostsError| FromSqlError::Other(Box::new(e)))
    }
}

/// Coerce a raw sum to a finite number. Blank input counts as not a number
/// rather than zero. Sign is not checked here.
pub fn parse_sum(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CostsError::InvalidSum(raw.to_string())),
    }
}

/// Record a cost stamped with the current time.
pub fn insert(db: &mut CostsDb, cost: &NewCost) -> Result<CostRecord> {
    insert_dated(db, cost, Utc::now())
}

/// Record a cost with an explicit creation timestamp. The write either
/// commits completely or leaves the store unchanged.
pub fn insert_dated(db: &mut CostsDb, cost: &NewCost, date: DateTime<Utc>) -> Result<CostRecord> {
    let sum = parse_sum(&cost.sum)?;
    let tx = db.conn_mut().transaction().map_err(CostsError::WriteFailed)?;
    tx.execute(
        "INSERT INTO costs(sum, currency, category, description, date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![sum, cost.currency, cost.category, cost.description, date],
    )
    .map_err(CostsError::WriteFailed)?;
    let id = tx.last_insert_rowid();
    tx.commit().map_err(CostsError::WriteFailed)?;
    debug!(id, sum, currency = %cost.currency, "cost recorded");
    Ok(CostRecord {
        id,
        sum,
        currency: cost.currency,
        category: cost.category.clone(),
        description: cost.description.clone(),
        date,
    })
}

fn record_from_row(r: &Row<'_>) -> rusqlite::Result<CostRecord> {
    Ok(CostRecord {
        id: r.get(0)?,
        sum: r.get(1)?,
        currency: r.get(2)?,
        category: r.get(3)?,
        description: r.get(4)?,
        date: r.get(5)?,
    })
}

/// Walk every stored cost, handing each to `visit`. Each call runs its own
/// fresh scan. Returns the number of records visited; on failure the caller
/// must discard whatever it collected.
pub fn scan_all<F>(db: &CostsDb, mut visit: F) -> Result<usize>
where
    F: FnMut(CostRecord),
{
    let mut stmt = db
        .conn()
        .prepare("SELECT id, sum, currency, category, description, date FROM costs ORDER BY id")
        .map_err(CostsError::ScanFailed)?;
    let mut rows = stmt.query([]).map_err(CostsError::ScanFailed)?;
    let mut seen = 0;
    while let Some(r) = rows.next().map_err(CostsError::ScanFailed)? {
        visit(record_from_row(r).map_err(CostsError::ScanFailed)?);
        seen += 1;
    }
    debug!(records = seen, "cost scan complete");
    Ok(seen)
}

pub fn all_costs(db: &CostsDb) -> Result<Vec<CostRecord>> {
    let mut out = Vec::new();
    scan_all(db, |c| out.push(c))?;
    Ok(out)
}
