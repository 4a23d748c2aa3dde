// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use costbook::costs::{all_costs, insert, insert_dated, parse_sum, scan_all};
use costbook::db::SCHEMA_VERSION;
use costbook::models::{Currency, NewCost};
use costbook::{CostsDb, CostsError};
use rusqlite::Connection;
use tempfile::tempdir;

fn cost(sum: &str, currency: Currency, description: &str) -> NewCost {
    NewCost {
        sum: sum.into(),
        currency,
        category: "Food".into(),
        description: description.into(),
    }
}

#[test]
fn insert_then_scan_round_trips() {
    let mut db = CostsDb::open_in_memory().unwrap();
    let before = Utc::now();
    let rec = insert(&mut db, &cost(" 12.5 ", Currency::Gbp, "Lunch")).unwrap();
    let after = Utc::now();

    assert_eq!(rec.sum, 12.5);
    let all = all_costs(&db).unwrap();
    assert_eq!(all.len(), 1);
    let stored = &all[0];
    assert_eq!(stored, &rec);
    assert_eq!(stored.currency, Currency::Gbp);
    assert_eq!(stored.category, "Food");
    assert_eq!(stored.description, "Lunch");
    assert!(stored.date >= before && stored.date <= after);
}

#[test]
fn ids_increase_with_each_insert() {
    let mut db = CostsDb::open_in_memory().unwrap();
    let a = insert(&mut db, &cost("1", Currency::Usd, "a")).unwrap();
    let b = insert(&mut db, &cost("2", Currency::Usd, "b")).unwrap();
    let c = insert(&mut db, &cost("3", Currency::Usd, "c")).unwrap();
    assert!(a.id < b.id && b.id < c.id);

    let mut seen = Vec::new();
    let n = scan_all(&db, |r| seen.push(r.id)).unwrap();
    assert_eq!(n, 3);
    assert_eq!(seen, vec![a.id, b.id, c.id]);
}

#[test]
fn non_numeric_sum_is_rejected_and_nothing_written() {
    let mut db = CostsDb::open_in_memory().unwrap();
    let err = insert(&mut db, &cost("ten", Currency::Usd, "x")).unwrap_err();
    assert!(matches!(err, CostsError::InvalidSum(ref s) if s == "ten"));
    assert!(all_costs(&db).unwrap().is_empty());
}

#[test]
fn sum_coercion_does_not_check_sign() {
    assert_eq!(parse_sum("-3").unwrap(), -3.0);
    assert_eq!(parse_sum("1e2").unwrap(), 100.0);
    assert!(parse_sum("").is_err());
    assert!(parse_sum("   ").is_err());
    assert!(parse_sum("inf").is_err());
}

#[test]
fn reopen_keeps_records_and_schema() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("costs.sqlite");
    let date = Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap();
    {
        let mut db = CostsDb::open(&path).unwrap();
        insert_dated(&mut db, &cost("9.99", Currency::Ils, "Coffee"), date).unwrap();
    }
    let db = CostsDb::open(&path).unwrap();
    assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
    assert_eq!(db.path(), Some(path.as_path()));
    let all = all_costs(&db).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].date, date);
    assert_eq!(all[0].currency, Currency::Ils);
}

#[test]
fn newer_schema_version_is_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("future.sqlite");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    drop(conn);

    let err = CostsDb::open(&path).unwrap_err();
    assert!(matches!(err, CostsError::StoreUnavailable { .. }));
}

#[test]
fn missing_directory_is_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("costs.sqlite");
    let err = CostsDb::open(&path).unwrap_err();
    assert!(matches!(err, CostsError::StoreUnavailable { .. }));
}

#[test]
fn aborted_insert_is_write_failed_and_leaves_store_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("abort.sqlite");
    let mut db = CostsDb::open(&path).unwrap();

    let raw = Connection::open(&path).unwrap();
    raw.execute_batch(
        "CREATE TRIGGER reject_costs BEFORE INSERT ON costs
         BEGIN SELECT RAISE(ABORT, 'storage full'); END;",
    )
    .unwrap();
    drop(raw);

    let date = Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap();
    let err = insert_dated(&mut db, &cost("9.99", Currency::Usd, "Coffee"), date).unwrap_err();
    assert!(matches!(err, CostsError::WriteFailed(_)));
    assert!(err.is_transient());
    assert!(all_costs(&db).unwrap().is_empty());
}
