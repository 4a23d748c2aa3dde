// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use costbook::settings::{load_rates_url, save_rates_url};
use costbook::CostsDb;
use tempfile::tempdir;

#[test]
fn load_before_save_is_empty() {
    let db = CostsDb::open_in_memory().unwrap();
    assert_eq!(load_rates_url(&db).unwrap(), "");
}

#[test]
fn last_save_wins() {
    let db = CostsDb::open_in_memory().unwrap();
    assert_eq!(save_rates_url(&db, "http://x").unwrap(), "http://x");
    assert_eq!(load_rates_url(&db).unwrap(), "http://x");

    save_rates_url(&db, "https://rates.example/latest.json").unwrap();
    assert_eq!(
        load_rates_url(&db).unwrap(),
        "https://rates.example/latest.json"
    );

    save_rates_url(&db, "").unwrap();
    assert_eq!(load_rates_url(&db).unwrap(), "");
}

#[test]
fn url_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.sqlite");
    {
        let db = CostsDb::open(&path).unwrap();
        save_rates_url(&db, "http://x").unwrap();
    }
    let db = CostsDb::open(&path).unwrap();
    assert_eq!(load_rates_url(&db).unwrap(), "http://x");
}
