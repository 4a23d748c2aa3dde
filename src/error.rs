// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Errors surfaced by the cost store and the report engine.
//!
//! Storage failures are reported, never retried here. Missing or incomplete
//! rate data is not an error at all: [`crate::fx::convert`] falls back to the
//! unconverted amount.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CostsError>;

#[derive(Debug, Error)]
pub enum CostsError {
    /// The store could not be opened: storage missing, locked, or carrying a
    /// schema version this build does not understand.
    #[error("cost store unavailable: {reason}")]
    StoreUnavailable {
        reason: String,
        #[source]
        source: Option<rusqlite::Error>,
    },
    /// An insert did not commit; nothing was written.
    #[error("failed to write cost record")]
    WriteFailed(#[source] rusqlite::Error),
    /// A read aborted mid-scan; partial results are discarded.
    #[error("failed to scan cost records")]
    ScanFailed(#[source] rusqlite::Error),
    #[error("sum '{0}' is not a number")]
    InvalidSum(String),
    #[error("month {0} is out of range (expected 1-12)")]
    InvalidMonth(u32),
    #[error("unknown currency '{0}' (expected USD, GBP, EURO or ILS)")]
    UnknownCurrency(String),
}

impl CostsError {
    pub(crate) fn unavailable(reason: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::StoreUnavailable {
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// Failures a caller may recover from by reopening the store and
    /// repeating the operation once.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::WriteFailed(_) | Self::ScanFailed(_))
    }
}
