// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use statementforge::catalog::CATALOG;
use statementforge::enrich::CatalogProvider;
use statementforge::ground_truth::project;
use statementforge::layout::StatementStyle;
use statementforge::models::Scenario;
use statementforge::scenario::{GeneratorConfig, ScenarioGenerator};

fn generate(seed: u64, num_transactions: usize) -> Scenario {
    let provider = CatalogProvider::new(&CATALOG);
    let config = GeneratorConfig {
        seed: Some(seed),
        reference_date: Some(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()),
        ..GeneratorConfig::default()
    };
    let mut generator = ScenarioGenerator::new(&CATALOG, &provider, config).unwrap();
    generator.generate(num_transactions).unwrap()
}

fn fixed_timestamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 15, 12, 0, 0).unwrap()
}

#[test]
fn projection_is_idempotent() {
    let scenario = generate(8, 12);
    let schema = StatementStyle::CulturesGenV.schema();
    let ts = fixed_timestamp();
    let a = serde_json::to_string_pretty(&project(&scenario, &schema, ts)).unwrap();
    let b = serde_json::to_string_pretty(&project(&scenario, &schema, ts)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn aggregates_cover_the_full_ledger() {
    let scenario = generate(15, 10);
    let record = project(&scenario, &StatementStyle::SheldonCreek.schema(), fixed_timestamp());
    let labels = &record.ground_truth_labels;

    assert_eq!(labels.num_transactions, 10);
    assert_eq!(labels.transaction_types.total(), 10);
    assert_eq!(labels.num_credits, labels.credit_items.len());
    assert_eq!(record.transactions.len(), 10);

    // Canonical reconciliation law, exact to the cent.
    assert_eq!(
        labels.total_debit_amount - labels.total_credit_amount,
        record.balances.total_due
    );
    assert_eq!(record.balances.aging.total(), record.balances.total_due);
}

#[test]
fn credit_items_mirror_the_credit_side() {
    let scenario = generate(23, 20);
    let record = project(&scenario, &StatementStyle::ComeauSeaFoods.schema(), fixed_timestamp());
    let labels = &record.ground_truth_labels;

    let expected: Vec<_> = scenario
        .entries
        .iter()
        .filter(|e| e.kind.is_credit())
        .collect();
    assert_eq!(labels.credit_items.len(), expected.len());
    let mut credit_total = Decimal::ZERO;
    for (item, entry) in labels.credit_items.iter().zip(expected) {
        assert_eq!(item.reference, entry.reference);
        assert_eq!(item.amount, entry.amount);
        assert_eq!(item.kind, entry.kind);
        credit_total += item.amount;
    }
    assert_eq!(credit_total, labels.total_credit_amount);
}

#[test]
fn hidden_columns_are_dropped_from_visible_transactions() {
    let scenario = generate(31, 15);

    // SheldonCreek renders neither PO numbers nor due dates.
    let plain = project(&scenario, &StatementStyle::SheldonCreek.schema(), fixed_timestamp());
    for tx in &plain.transactions {
        assert!(tx.po_number.is_none());
        assert!(tx.due_date.is_none());
    }

    // CulturesGenV renders both; values pass through from the scenario.
    let full = project(&scenario, &StatementStyle::CulturesGenV.schema(), fixed_timestamp());
    for (tx, entry) in full.transactions.iter().zip(&scenario.entries) {
        assert_eq!(tx.po_number, entry.po_number);
        assert_eq!(tx.due_date, entry.due_date);
        assert_eq!(tx.amount, entry.amount);
        assert_eq!(tx.is_debit, entry.kind.is_debit());
    }
}

#[test]
fn metadata_names_the_style_and_scenario() {
    let scenario = generate(44, 6);
    let record = project(&scenario, &StatementStyle::BriggsEquipment.schema(), fixed_timestamp());
    assert_eq!(record.metadata.pdf_style, "BriggsEquipment");
    assert_eq!(record.metadata.statement_number, scenario.statement_number);
    assert_eq!(record.metadata.statement_date, scenario.statement_date);
    assert_eq!(record.company, scenario.supplier);
    assert_eq!(record.customer, scenario.customer);
}

#[test]
fn serialized_record_has_the_published_shape() {
    let scenario = generate(52, 8);
    let record = project(&scenario, &StatementStyle::CinnabarValley.schema(), fixed_timestamp());
    let value: serde_json::Value = serde_json::to_value(&record).unwrap();

    for key in ["metadata", "company", "customer", "balances", "transactions", "ground_truth_labels"] {
        assert!(value.get(key).is_some(), "missing top-level key {}", key);
    }
    let aging = &value["balances"]["aging"];
    for key in ["current", "days_1_30", "days_31_60", "days_61_90", "days_90_plus"] {
        assert!(aging.get(key).is_some(), "missing aging key {}", key);
    }
    let types = &value["ground_truth_labels"]["transaction_types"];
    for key in ["invoices", "credit_notes", "payments", "debit_notes"] {
        assert!(types.get(key).is_some(), "missing type key {}", key);
    }
    let first = &value["transactions"][0];
    assert!(first.get("type").is_some());
    assert!(first.get("is_credit").is_some());
    assert!(first.get("is_debit").is_some());
}
