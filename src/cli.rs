// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn offline_flag() -> Arg {
    Arg::new("offline")
        .long("offline")
        .action(ArgAction::SetTrue)
        .help("Skip the rate source and use the default rates")
}

fn display_currency() -> Arg {
    Arg::new("currency")
        .long("currency")
        .default_value("USD")
        .help("Display currency: USD, GBP, EURO or ILS")
}

fn year_arg() -> Arg {
    Arg::new("year")
        .long("year")
        .required(true)
        .value_parser(value_parser!(i32))
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .required(true)
        .value_parser(value_parser!(u32).range(1..=12))
        .help("Calendar month, 1-12")
}

pub fn build_cli() -> Command {
    Command::new("costbook")
        .version(clap::crate_version!())
        .about("Local multi-currency expense log with monthly and yearly reports")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("COSTBOOK_DB")
                .help("Path to the store (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .env("COSTBOOK_LOG")
                .default_value("warn")
                .help("Log filter, e.g. warn, debug, costbook=trace"),
        )
        .subcommand(Command::new("init").about("Create the store if needed and print its path"))
        .subcommand(
            Command::new("cost")
                .about("Record and list costs")
                .subcommand(
                    Command::new("add")
                        .about("Record a cost stamped with the current time")
                        .arg(
                            Arg::new("sum")
                                .long("sum")
                                .required(true)
                                .allow_negative_numbers(true),
                        )
                        .arg(Arg::new("currency").long("currency").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .action(ArgAction::SetTrue)
                                .help("Print the stored record as JSON"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List every stored cost"))),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly and yearly reports")
                .subcommand(json_flags(
                    Command::new("monthly")
                        .about("Itemized costs for one month with a grand total")
                        .arg(year_arg())
                        .arg(month_arg())
                        .arg(display_currency())
                        .arg(offline_flag())
                        .arg(
                            Arg::new("by-category")
                                .long("by-category")
                                .action(ArgAction::SetTrue)
                                .help("Show totals per category instead of items"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("yearly")
                        .about("Per-month totals for one year")
                        .arg(year_arg())
                        .arg(display_currency())
                        .arg(offline_flag()),
                )),
        )
        .subcommand(
            Command::new("settings")
                .about("Rate source configuration")
                .subcommand(
                    Command::new("set-url")
                        .about("Save the exchange-rate source URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(Command::new("get-url").about("Show the saved exchange-rate source URL")),
        )
        .subcommand(
            Command::new("fx")
                .about("Exchange rates")
                .subcommand(
                    Command::new("rates")
                        .about("Show the rates reports would use")
                        .arg(offline_flag())
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .action(ArgAction::SetTrue)
                                .help("Print as JSON"),
                        ),
                )
                .subcommand(
                    Command::new("convert")
                        .about("Convert an amount between currencies")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_negative_numbers(true),
                        )
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true))
                        .arg(offline_flag()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write reports to files")
                .subcommand(
                    Command::new("monthly")
                        .about("Export a monthly report")
                        .arg(year_arg())
                        .arg(month_arg())
                        .arg(display_currency())
                        .arg(offline_flag())
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
