// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::CATALOG;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("companies", _)) => {
            let rows = CATALOG
                .companies
                .iter()
                .map(|c| {
                    vec![
                        c.name.clone(),
                        c.address.replace('\n', ", "),
                        c.phone.clone(),
                        c.email.clone(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Name", "Address", "Phone", "Email"], rows));
        }
        Some(("customers", _)) => {
            let rows = CATALOG
                .customers
                .iter()
                .map(|c| vec![c.account.clone(), c.name.clone(), c.address.replace('\n', ", ")])
                .collect();
            println!("{}", pretty_table(&["Account", "Name", "Address"], rows));
        }
        _ => {}
    }
    Ok(())
}
