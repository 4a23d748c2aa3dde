// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use costbook::fx::{convert, convert_currency, default_rates, RateTable};
use costbook::models::Currency;

#[test]
fn default_rates_match_offline_table() {
    let rates = default_rates();
    let pairs: Vec<(&str, f64)> = rates.iter().collect();
    assert_eq!(
        pairs,
        vec![("EURO", 0.7), ("GBP", 0.6), ("ILS", 3.4), ("USD", 1.0)]
    );
}

#[test]
fn same_currency_is_identity() {
    let rates = default_rates();
    for ccy in Currency::ALL {
        for x in [0.0, 0.1, 12.34, 1e9] {
            assert_eq!(convert(x, ccy.code(), ccy.code(), Some(&rates)), x);
        }
    }
}

#[test]
fn missing_rates_fall_back_to_amount() {
    assert_eq!(convert(42.5, "USD", "GBP", None), 42.5);

    let partial = RateTable::new().with("USD", 1.0).with("GBP", 0.6);
    assert_eq!(convert(42.5, "USD", "ZZZ", Some(&partial)), 42.5);
    assert_eq!(convert(42.5, "ZZZ", "GBP", Some(&partial)), 42.5);

    let zero = RateTable::new().with("USD", 1.0).with("ILS", 0.0);
    assert_eq!(convert(10.0, "USD", "ILS", Some(&zero)), 10.0);
}

#[test]
fn converts_through_usd() {
    let rates = default_rates();
    // 7 EURO -> USD = 7 / 0.7; -> ILS = * 3.4
    let res = convert(7.0, "EURO", "ILS", Some(&rates));
    assert_eq!(res, 7.0 / 0.7 * 3.4);
    assert_eq!(format!("{:.2}", res), "34.00");

    let back = convert_currency(34.0, Currency::Ils, Currency::Usd, Some(&rates));
    assert_eq!(format!("{:.2}", back), "10.00");
}

#[test]
fn currency_codes_parse_case_insensitively() {
    assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
    assert_eq!(" Euro ".parse::<Currency>().unwrap(), Currency::Euro);
    assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::Euro);
    assert_eq!("eur".parse::<Currency>().unwrap().code(), "EURO");
    assert!("JPY".parse::<Currency>().is_err());
    assert_eq!(Currency::Euro.to_string(), "EURO");
}
