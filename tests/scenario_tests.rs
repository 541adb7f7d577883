// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, NaiveDate};
use statementforge::catalog::CATALOG;
use statementforge::enrich::CatalogProvider;
use statementforge::error::StatementError;
use statementforge::models::{AgeBucket, Scenario, TransactionKind};
use statementforge::scenario::{GeneratorConfig, ScenarioGenerator};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
}

fn config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        seed: Some(seed),
        reference_date: Some(reference_date()),
        ..GeneratorConfig::default()
    }
}

fn generate(seed: u64, num_transactions: usize) -> Scenario {
    let provider = CatalogProvider::new(&CATALOG);
    let mut generator = ScenarioGenerator::new(&CATALOG, &provider, config(seed)).unwrap();
    generator.generate(num_transactions).unwrap()
}

#[test]
fn entry_invariants_hold() {
    for seed in [1, 7, 42, 1234] {
        let scenario = generate(seed, 12);
        for entry in &scenario.entries {
            assert_ne!(
                entry.kind.is_credit(),
                entry.kind.is_debit(),
                "credit/debit must be mutually exclusive for {}",
                entry.reference
            );
            assert!(entry.amount > rust_decimal::Decimal::ZERO);
            assert_eq!(
                entry.due_date.is_some(),
                entry.kind == TransactionKind::Invoice,
                "due date is an invoice-only field"
            );
            if let Some(due) = entry.due_date {
                assert_eq!(due, entry.date + Duration::days(30));
            }
            assert_eq!(
                entry.description.is_some(),
                entry.kind == TransactionKind::CreditNote,
                "descriptions explain credit notes only"
            );
            assert!(entry.reference.starts_with(entry.kind.prefix()));
        }
    }
}

#[test]
fn dates_are_ordered_and_inside_the_aging_window() {
    let scenario = generate(5, 15);
    let window_start = reference_date() - Duration::days(120);
    let mut prev = window_start;
    for entry in &scenario.entries {
        assert!(entry.date >= prev, "ledger dates must be non-decreasing");
        assert!(entry.date >= window_start && entry.date <= reference_date());
        prev = entry.date;
    }
}

#[test]
fn references_are_unique_within_a_scenario() {
    let scenario = generate(11, 40);
    let mut seen = std::collections::HashSet::new();
    for entry in &scenario.entries {
        assert!(seen.insert(entry.reference.clone()));
    }
}

#[test]
fn aging_buckets_sum_to_total_due() {
    for seed in [3, 9, 77] {
        let scenario = generate(seed, 10);
        assert_eq!(scenario.aging.total(), scenario.total_due);
    }
}

#[test]
fn reconciliation_identity_holds() {
    // The ledger opens at zero, so debits - credits == total_due exactly.
    let scenario = generate(21, 18);
    let mut debits = rust_decimal::Decimal::ZERO;
    let mut credits = rust_decimal::Decimal::ZERO;
    for entry in &scenario.entries {
        if entry.kind.is_debit() {
            debits += entry.amount;
        } else {
            credits += entry.amount;
        }
    }
    assert_eq!(debits - credits, scenario.total_due);
    assert_eq!(
        scenario.entries.last().unwrap().balance_after,
        scenario.total_due
    );
}

#[test]
fn entries_are_bucketed_by_their_age() {
    let scenario = generate(13, 10);
    for entry in &scenario.entries {
        let age = entry.age_days(scenario.statement_date);
        let bucket = AgeBucket::for_age(age);
        // Re-derive the snapshot and confirm this entry's signed amount
        // landed where its age says it should.
        match (age, bucket) {
            (a, AgeBucket::Current) => assert!(a <= 0),
            (a, AgeBucket::Days1To30) => assert!(a >= 1 && a <= 30),
            (a, AgeBucket::Days31To60) => assert!(a >= 31 && a <= 60),
            (a, AgeBucket::Days61To90) => assert!(a >= 61 && a <= 90),
            (a, AgeBucket::Days90Plus) => assert!(a > 90),
        }
    }
    let mut rebuilt = statementforge::models::AgingSnapshot::default();
    for entry in &scenario.entries {
        rebuilt.add(
            AgeBucket::for_age(entry.age_days(scenario.statement_date)),
            entry.signed_amount(),
        );
    }
    assert_eq!(rebuilt, scenario.aging);
}

#[test]
fn five_or_more_entries_cover_every_bucket() {
    let scenario = generate(2, 5);
    let aging = &scenario.aging;
    for (name, value) in [
        ("current", aging.current),
        ("1-30", aging.days_1_30),
        ("31-60", aging.days_31_60),
        ("61-90", aging.days_61_90),
        ("90+", aging.days_90_plus),
    ] {
        assert_ne!(
            value,
            rust_decimal::Decimal::ZERO,
            "bucket {} should be populated",
            name
        );
    }
}

#[test]
fn fixed_seed_reproduces_the_scenario() {
    let a = generate(99, 10);
    let b = generate(99, 10);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn supplier_and_customer_differ() {
    for seed in 0..20 {
        let scenario = generate(seed, 3);
        assert_ne!(scenario.supplier.name, scenario.customer.name);
    }
}

#[test]
fn invoice_only_mix_yields_a_single_bucket_for_one_entry() {
    let provider = CatalogProvider::new(&CATALOG);
    let config = GeneratorConfig {
        invoice_ratio: 1.0,
        credit_note_ratio: 0.0,
        payment_ratio: 0.0,
        debit_note_ratio: 0.0,
        seed: Some(4),
        reference_date: Some(reference_date()),
        ..GeneratorConfig::default()
    };
    let mut generator = ScenarioGenerator::new(&CATALOG, &provider, config).unwrap();
    let scenario = generator.generate(1).unwrap();

    assert_eq!(scenario.entries.len(), 1);
    let entry = &scenario.entries[0];
    assert_eq!(entry.kind, TransactionKind::Invoice);

    let aging = &scenario.aging;
    let non_zero: Vec<_> = [
        (AgeBucket::Current, aging.current),
        (AgeBucket::Days1To30, aging.days_1_30),
        (AgeBucket::Days31To60, aging.days_31_60),
        (AgeBucket::Days61To90, aging.days_61_90),
        (AgeBucket::Days90Plus, aging.days_90_plus),
    ]
    .into_iter()
    .filter(|(_, v)| *v != rust_decimal::Decimal::ZERO)
    .collect();
    assert_eq!(non_zero.len(), 1);
    assert_eq!(
        non_zero[0].0,
        AgeBucket::for_age(entry.age_days(scenario.statement_date))
    );
    assert_eq!(non_zero[0].1, entry.amount);
}

#[test]
fn zero_transactions_is_an_invalid_configuration() {
    let provider = CatalogProvider::new(&CATALOG);
    let mut generator = ScenarioGenerator::new(&CATALOG, &provider, config(1)).unwrap();
    match generator.generate(0) {
        Err(StatementError::InvalidConfiguration(_)) => {}
        other => panic!("expected InvalidConfiguration, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn degenerate_configs_are_rejected() {
    let bad_ratios = GeneratorConfig {
        invoice_ratio: 0.9,
        credit_note_ratio: 0.9,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        bad_ratios.validate(),
        Err(StatementError::InvalidConfiguration(_))
    ));

    let short_window = GeneratorConfig {
        aging_window_days: 30,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        short_window.validate(),
        Err(StatementError::InvalidConfiguration(_))
    ));
}
