// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::Catalog;
use crate::enrich::CompanyProvider;
use crate::error::StatementError;
use crate::models::{
    AgeBucket, AgingSnapshot, LedgerEntry, Scenario, TransactionKind,
};
use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Generation-policy knobs. Ratios steer the transaction mix; they are a
/// policy parameter, not a hard law (the running-balance guard can force
/// extra invoices).
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub invoice_ratio: f64,
    pub credit_note_ratio: f64,
    pub payment_ratio: f64,
    pub debit_note_ratio: f64,
    /// Statement period: every entry date falls within this many days
    /// before the statement date.
    pub aging_window_days: i64,
    /// Invoice due dates are offset this far from the invoice date.
    pub payment_terms_days: i64,
    pub po_probability: f64,
    pub seed: Option<u64>,
    /// Statement date; defaults to today.
    pub reference_date: Option<NaiveDate>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            invoice_ratio: 0.50,
            credit_note_ratio: 0.15,
            payment_ratio: 0.25,
            debit_note_ratio: 0.10,
            aging_window_days: 120,
            payment_terms_days: 30,
            po_probability: 0.7,
            seed: None,
            reference_date: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), StatementError> {
        let ratios = [
            self.invoice_ratio,
            self.credit_note_ratio,
            self.payment_ratio,
            self.debit_note_ratio,
        ];
        if ratios.iter().any(|r| *r < 0.0) {
            return Err(StatementError::InvalidConfiguration(
                "transaction ratios must be non-negative".into(),
            ));
        }
        let total: f64 = ratios.iter().sum();
        if (total - 1.0).abs() > 0.01 {
            return Err(StatementError::InvalidConfiguration(format!(
                "transaction ratios must sum to 1.0, got {}",
                total
            )));
        }
        if self.aging_window_days < 91 {
            return Err(StatementError::InvalidConfiguration(
                "aging window must cover all five buckets (>= 91 days)".into(),
            ));
        }
        if self.payment_terms_days < 1 {
            return Err(StatementError::InvalidConfiguration(
                "payment terms must be at least 1 day".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.po_probability) {
            return Err(StatementError::InvalidConfiguration(
                "po probability must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

/// Builds internally consistent statement scenarios. All randomness flows
/// from the single seeded rng owned here, so a fixed seed reproduces a
/// batch exactly.
pub struct ScenarioGenerator<'a> {
    catalog: &'a Catalog,
    provider: &'a dyn CompanyProvider,
    config: GeneratorConfig,
    rng: StdRng,
}

impl<'a> ScenarioGenerator<'a> {
    pub fn new(
        catalog: &'a Catalog,
        provider: &'a dyn CompanyProvider,
        config: GeneratorConfig,
    ) -> Result<Self, StatementError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(ScenarioGenerator {
            catalog,
            provider,
            config,
            rng,
        })
    }

    /// Produces one scenario with exactly `num_transactions` ledger entries.
    /// The returned scenario already satisfies every data-model invariant;
    /// downstream components never re-validate arithmetic.
    pub fn generate(&mut self, num_transactions: usize) -> Result<Scenario, StatementError> {
        if num_transactions < 1 {
            return Err(StatementError::InvalidConfiguration(
                "num_transactions must be at least 1".into(),
            ));
        }

        let statement_date = self
            .config
            .reference_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let statement_number = format!("{}", self.rng.gen_range(10000..=99999u32));

        let supplier = self
            .provider
            .companies(1, &mut self.rng)
            .into_iter()
            .next()
            .unwrap_or_else(|| self.catalog.sample_company(&mut self.rng));
        let mut customer = self.catalog.sample_customer(&mut self.rng);
        for _ in 0..8 {
            if customer.name != supplier.name {
                break;
            }
            customer = self.catalog.sample_customer(&mut self.rng);
        }

        let ages = self.sample_ages(num_transactions);
        let mut used_refs: HashSet<String> = HashSet::new();
        let mut entries = Vec::with_capacity(num_transactions);
        let mut aging = AgingSnapshot::default();
        // Running balance in integer cents; the ledger opens at zero.
        let mut balance_cents: i64 = 0;

        for age in ages {
            let date = statement_date - Duration::days(age);
            let kind = self.pick_kind(balance_cents);
            let amount_cents = self.pick_amount_cents(kind, balance_cents);
            let amount = Decimal::new(amount_cents, 2);

            if kind.is_debit() {
                balance_cents += amount_cents;
            } else {
                balance_cents -= amount_cents;
            }

            let reference = self.next_reference(kind, &mut used_refs);
            let po_number = if self.rng.gen_bool(self.config.po_probability) {
                Some(format!("PO{}", self.rng.gen_range(100000..=999999u32)))
            } else {
                None
            };
            let due_date = (kind == TransactionKind::Invoice)
                .then(|| date + Duration::days(self.config.payment_terms_days));
            let description = (kind == TransactionKind::CreditNote)
                .then(|| self.catalog.sample_adjustment_reason(&mut self.rng));

            let entry = LedgerEntry {
                date,
                kind,
                reference,
                amount,
                due_date,
                po_number,
                description,
                balance_after: Decimal::new(balance_cents, 2),
            };
            aging.add(AgeBucket::for_age(age), entry.signed_amount());
            entries.push(entry);
        }

        let total_due = Decimal::new(balance_cents, 2);
        debug_assert_eq!(aging.total(), total_due);

        Ok(Scenario {
            statement_number,
            statement_date,
            supplier,
            customer,
            entries,
            aging,
            total_due,
        })
    }

    /// Entry ages in days, oldest first so ledger dates come out ascending.
    /// With five or more entries one age is seeded per bucket so the whole
    /// aging summary is populated.
    fn sample_ages(&mut self, count: usize) -> Vec<i64> {
        let window = self.config.aging_window_days;
        let mut ages: Vec<i64> = Vec::with_capacity(count);
        if count >= 5 {
            ages.push(0);
            ages.push(self.rng.gen_range(1..=30));
            ages.push(self.rng.gen_range(31..=60));
            ages.push(self.rng.gen_range(61..=90));
            ages.push(self.rng.gen_range(91..=window));
        }
        while ages.len() < count {
            ages.push(self.rng.gen_range(0..=window));
        }
        ages.sort_unstable_by(|a, b| b.cmp(a));
        ages
    }

    /// Weighted kind selection. While the running balance is non-positive
    /// the entry is forced to Invoice so credit-side amounts stay meaningful.
    fn pick_kind(&mut self, balance_cents: i64) -> TransactionKind {
        if balance_cents <= 0 {
            return TransactionKind::Invoice;
        }
        let roll: f64 = self.rng.r#gen();
        let mut cumulative = 0.0;
        for (kind, ratio) in [
            (TransactionKind::Invoice, self.config.invoice_ratio),
            (TransactionKind::CreditNote, self.config.credit_note_ratio),
            (TransactionKind::Payment, self.config.payment_ratio),
            (TransactionKind::DebitNote, self.config.debit_note_ratio),
        ] {
            cumulative += ratio;
            if roll < cumulative {
                return kind;
            }
        }
        TransactionKind::Invoice
    }

    /// Amount policy in integer cents, so bucket sums reconcile exactly.
    fn pick_amount_cents(&mut self, kind: TransactionKind, balance_cents: i64) -> i64 {
        match kind {
            // 100.00 - 25,000.00
            TransactionKind::Invoice => self.rng.gen_range(10_000..=2_500_000),
            // 10.00 up to max(50.00, min(30% of balance, 5,000.00))
            TransactionKind::CreditNote => {
                let cap = (balance_cents * 3 / 10).min(500_000).max(5_000);
                self.rng.gen_range(1_000..=cap)
            }
            // 10% - 80% of the open balance
            TransactionKind::Payment => {
                let lo = (balance_cents / 10).max(1);
                let hi = (balance_cents * 8 / 10).max(lo);
                self.rng.gen_range(lo..=hi)
            }
            // 10.00 - 500.00
            TransactionKind::DebitNote => self.rng.gen_range(1_000..=50_000),
        }
    }

    fn next_reference(&mut self, kind: TransactionKind, used: &mut HashSet<String>) -> String {
        loop {
            let candidate = format!("{}{}", kind.prefix(), self.rng.gen_range(10000..=99999u32));
            if used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
