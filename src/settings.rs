// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, OptionalExtension};

use crate::db::CostsDb;
use crate::error::{CostsError, Result};

pub const RATES_URL_KEY: &str = "ratesUrl";

/// Persist the rate-source URL, replacing any previous value.
pub fn save_rates_url(db: &CostsDb, url: &str) -> Result<String> {
    db.conn()
        .execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![RATES_URL_KEY, url],
        )
        .map_err(CostsError::WriteFailed)?;
    Ok(url.to_string())
}

/// Last saved rate-source URL, or an empty string if none was ever saved.
pub fn load_rates_url(db: &CostsDb) -> Result<String> {
    let v: Option<String> = db
        .conn()
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![RATES_URL_KEY],
            |r| r.get(0),
        )
        .optional()
        .map_err(CostsError::ScanFailed)?;
    Ok(v.unwrap_or_default())
}
