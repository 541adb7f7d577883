// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::CATALOG;
use crate::enrich::CatalogProvider;
use crate::ground_truth;
use crate::layout::StatementStyle;
use crate::scenario::{GeneratorConfig, ScenarioGenerator};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::Utc;
use std::str::FromStr;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let num_transactions: usize = *m.get_one::<usize>("transactions").unwrap();
    let style = StatementStyle::from_str(m.get_one::<String>("style").unwrap())?;

    let config = GeneratorConfig {
        seed: m.get_one::<u64>("seed").copied(),
        reference_date: m
            .get_one::<String>("date")
            .map(|s| crate::utils::parse_date(s))
            .transpose()?,
        ..GeneratorConfig::default()
    };

    let provider = CatalogProvider::new(&CATALOG);
    let mut generator = ScenarioGenerator::new(&CATALOG, &provider, config)?;
    let scenario = generator.generate(num_transactions)?;
    let schema = style.schema();
    let record = ground_truth::project(&scenario, &schema, Utc::now());

    if maybe_print_json(json_flag, jsonl_flag, &record)? {
        return Ok(());
    }

    println!(
        "Statement {} | {} | {} -> {} | style {}",
        scenario.statement_number,
        scenario.statement_date,
        scenario.supplier.name,
        scenario.customer.name,
        style
    );

    let rows = scenario
        .entries
        .iter()
        .map(|e| {
            vec![
                e.date.to_string(),
                e.kind.label().to_string(),
                e.reference.clone(),
                fmt_money(&e.amount),
                if e.kind.is_debit() { "debit" } else { "credit" }.to_string(),
                e.po_number.clone().unwrap_or_default(),
                e.due_date.map(|d| d.to_string()).unwrap_or_default(),
                fmt_money(&e.balance_after),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Date", "Type", "Reference", "Amount", "Side", "PO", "Due", "Balance"],
            rows
        )
    );

    let aging = &scenario.aging;
    println!(
        "{}",
        pretty_table(
            &["Current", "1-30", "31-60", "61-90", "90+", "Total Due"],
            vec![vec![
                fmt_money(&aging.current),
                fmt_money(&aging.days_1_30),
                fmt_money(&aging.days_31_60),
                fmt_money(&aging.days_61_90),
                fmt_money(&aging.days_90_plus),
                fmt_money(&scenario.total_due),
            ]]
        )
    );
    Ok(())
}
