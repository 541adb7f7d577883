// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::layout::StatementStyle;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    fn yn(v: bool) -> String {
        if v { "yes".into() } else { "no".into() }
    }

    let rows = StatementStyle::ALL
        .iter()
        .map(|style| {
            let s = style.schema();
            vec![
                style.name().to_string(),
                s.accent.to_string(),
                yn(s.shows_po_number),
                yn(s.shows_due_date),
                yn(s.shows_days_past_due),
                yn(s.shows_running_balance),
                yn(s.shows_description),
                yn(s.shows_credit_limit),
                if s.aging_at_top { "top" } else { "bottom" }.to_string(),
            ]
        })
        .collect();

    println!(
        "{}",
        pretty_table(
            &[
                "Style",
                "Accent",
                "PO",
                "Due Date",
                "Days Past Due",
                "Running Bal",
                "Description",
                "Credit Limit",
                "Aging",
            ],
            rows
        )
    );
    Ok(())
}
