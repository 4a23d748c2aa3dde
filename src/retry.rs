// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::warn;

use crate::db::CostsDb;
use crate::error::Result;

/// Run `op`; after a transient store failure, reopen the store once, swap
/// the new handle into `db` and run `op` a second time. Errors from the
/// reopen itself, and any error from the second attempt, are returned as-is.
pub fn with_reopen_retry<T, R, F>(db: &mut CostsDb, reopen: R, mut op: F) -> Result<T>
where
    R: FnOnce() -> Result<CostsDb>,
    F: FnMut(&mut CostsDb) -> Result<T>,
{
    match op(&mut *db) {
        Err(err) if err.is_transient() => {
            warn!("store operation failed, reopening once: {err}");
            *db = reopen()?;
            op(&mut *db)
        }
        other => other,
    }
}
