// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use costbook::costs::{all_costs, insert};
use costbook::models::{Currency, NewCost};
use costbook::retry::with_reopen_retry;
use costbook::{CostsDb, CostsError};
use std::cell::Cell;
use tempfile::tempdir;

fn coffee() -> NewCost {
    NewCost {
        sum: "4.2".into(),
        currency: Currency::Usd,
        category: "Food".into(),
        description: "Coffee".into(),
    }
}

#[test]
fn write_failure_reopens_and_retries_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("retry.sqlite");
    let mut db = CostsDb::open(&path).unwrap();
    let attempts = Cell::new(0);
    let reopens = Cell::new(0);

    let rec = with_reopen_retry(
        &mut db,
        || {
            reopens.set(reopens.get() + 1);
            CostsDb::open(&path)
        },
        |db| {
            attempts.set(attempts.get() + 1);
            if attempts.get() == 1 {
                return Err(CostsError::WriteFailed(rusqlite::Error::QueryReturnedNoRows));
            }
            insert(db, &coffee())
        },
    )
    .unwrap();

    assert_eq!(attempts.get(), 2);
    assert_eq!(reopens.get(), 1);
    assert_eq!(rec.description, "Coffee");
    assert_eq!(all_costs(&db).unwrap().len(), 1);
}

#[test]
fn second_failure_is_returned() {
    let mut db = CostsDb::open_in_memory().unwrap();
    let attempts = Cell::new(0);

    let err = with_reopen_retry(&mut db, CostsDb::open_in_memory, |_| -> costbook::Result<()> {
        attempts.set(attempts.get() + 1);
        Err(CostsError::ScanFailed(rusqlite::Error::QueryReturnedNoRows))
    })
    .unwrap_err();

    assert!(matches!(err, CostsError::ScanFailed(_)));
    assert_eq!(attempts.get(), 2);
}

#[test]
fn validation_errors_are_not_retried() {
    let mut db = CostsDb::open_in_memory().unwrap();
    let reopens = Cell::new(0);
    let bad = NewCost {
        sum: "abc".into(),
        ..coffee()
    };

    let err = with_reopen_retry(
        &mut db,
        || {
            reopens.set(reopens.get() + 1);
            CostsDb::open_in_memory()
        },
        |db| insert(db, &bad),
    )
    .unwrap_err();

    assert!(matches!(err, CostsError::InvalidSum(_)));
    assert_eq!(reopens.get(), 0);
}
