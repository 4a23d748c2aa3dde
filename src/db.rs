// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Context;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CostsError, Result};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Costbook", "costbook"));

/// Bumped whenever `SCHEMA` changes shape.
pub const SCHEMA_VERSION: i32 = 1;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS costs(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sum REAL NOT NULL,
        currency TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL,
        date TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_costs_date ON costs(date);

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
"#;

/// Handle to an opened cost store. Every store operation takes one
/// explicitly; there is no process-wide store.
#[derive(Debug)]
pub struct CostsDb {
    conn: Connection,
    path: Option<PathBuf>,
}

impl CostsDb {
    /// Open (creating if needed) the store at `path`. Opening a store that
    /// is already at [`SCHEMA_VERSION`] leaves it untouched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(|e| CostsError::unavailable(format!("open {}", path.display()), e))?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| CostsError::unavailable("open in-memory store", e))?;
        Self::init(conn, None)
    }

    fn init(mut conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        migrate(&mut conn)?;
        debug!(path = ?path, "cost store open");
        Ok(Self { conn, path })
    }

    /// Location on disk, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn schema_version(&self) -> Result<i32> {
        read_version(&self.conn)
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

fn read_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |r| r.get(0))
        .map_err(|e| CostsError::unavailable("read schema version", e))
}

fn migrate(conn: &mut Connection) -> Result<()> {
    let version = read_version(conn)?;
    if version == SCHEMA_VERSION {
        return Ok(());
    }
    if version > SCHEMA_VERSION {
        return Err(CostsError::StoreUnavailable {
            reason: format!(
                "store schema version {} is newer than supported version {}",
                version, SCHEMA_VERSION
            ),
            source: None,
        });
    }
    debug!(from = version, to = SCHEMA_VERSION, "migrating cost store schema");
    let tx = conn
        .transaction()
        .map_err(|e| CostsError::unavailable("begin schema migration", e))?;
    tx.execute_batch(SCHEMA)
        .map_err(|e| CostsError::unavailable("create schema", e))?;
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)
        .map_err(|e| CostsError::unavailable("record schema version", e))?;
    tx.commit()
        .map_err(|e| CostsError::unavailable("commit schema migration", e))?;
    Ok(())
}

pub fn db_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("costbook.sqlite"))
}

/// Open the store at `path`, or at the platform data dir when `None`.
pub fn open_or_init(path: Option<&Path>) -> anyhow::Result<CostsDb> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => db_path()?,
    };
    let db = CostsDb::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    Ok(db)
}
