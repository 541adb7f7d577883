// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use statementforge::{cli, commands};

fn main() -> Result<()> {
    // Enrichment credentials may live in a local .env
    dotenv::dotenv().ok();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("generate", sub)) => commands::generate::handle(sub)?,
        Some(("preview", sub)) => commands::preview::handle(sub)?,
        Some(("styles", _)) => commands::styles::handle()?,
        Some(("verify", sub)) => commands::verify::handle(sub)?,
        Some(("catalog", sub)) => commands::catalog::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
