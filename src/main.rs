// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use costbook::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(|s| s.as_str())
        .unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let db_arg = matches.get_one::<String>("db").map(Path::new);
    let mut db = db::open_or_init(db_arg)?;

    match matches.subcommand() {
        Some(("init", _)) => match db.path() {
            Some(p) => println!("Database initialized at {}", p.display()),
            None => println!("Database initialized in memory"),
        },
        Some(("cost", sub)) => commands::costs::handle(&mut db, sub)?,
        Some(("report", sub)) => commands::reports::handle(&db, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&db, sub)?,
        Some(("fx", sub)) => commands::fx::handle(&db, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&db, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
