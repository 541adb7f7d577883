// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::layout::LayoutSchema;
use crate::models::{Company, Customer, AgingSnapshot, Scenario, TransactionKind};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label record paired with a rendered document. Always re-derived from the
/// same scenario the renderer consumed, so document and labels cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthRecord {
    pub metadata: Metadata,
    pub company: Company,
    pub customer: Customer,
    pub balances: Balances,
    pub transactions: Vec<VisibleTransaction>,
    pub ground_truth_labels: Labels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub statement_number: String,
    pub statement_date: NaiveDate,
    pub pdf_style: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balances {
    pub total_due: Decimal,
    pub aging: AgingSnapshot,
}

/// One ledger line as a document-understanding model could observe it.
/// Fields a layout does not render are dropped here even though the
/// scenario retains them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleTransaction {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub reference: String,
    pub amount: Decimal,
    pub is_credit: bool,
    pub is_debit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    pub credit_items: Vec<CreditItem>,
    pub num_credits: usize,
    pub total_credit_amount: Decimal,
    pub total_debit_amount: Decimal,
    pub num_transactions: usize,
    pub transaction_types: TypeCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditItem {
    pub reference: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    pub invoices: usize,
    pub credit_notes: usize,
    pub payments: usize,
    pub debit_notes: usize,
}

impl TypeCounts {
    pub fn total(&self) -> usize {
        self.invoices + self.credit_notes + self.payments + self.debit_notes
    }
}

/// Projects a scenario into its label record. Pure function of its inputs
/// (the timestamp is injected), so repeated calls are byte-identical.
///
/// Aggregates run over the full ledger; the schema only shapes per-row
/// fields. The canonical reconciliation identity preserved here:
/// `total_debit_amount - total_credit_amount == balances.total_due`.
pub fn project(
    scenario: &Scenario,
    schema: &LayoutSchema,
    generated_at: DateTime<Utc>,
) -> GroundTruthRecord {
    let mut credit_items = Vec::new();
    let mut total_credit = Decimal::ZERO;
    let mut total_debit = Decimal::ZERO;
    let mut counts = TypeCounts::default();

    for entry in &scenario.entries {
        match entry.kind {
            TransactionKind::Invoice => counts.invoices += 1,
            TransactionKind::CreditNote => counts.credit_notes += 1,
            TransactionKind::Payment => counts.payments += 1,
            TransactionKind::DebitNote => counts.debit_notes += 1,
        }
        if entry.kind.is_credit() {
            total_credit += entry.amount;
            credit_items.push(CreditItem {
                reference: entry.reference.clone(),
                date: entry.date,
                amount: entry.amount,
                kind: entry.kind,
                description: entry.description.clone(),
            });
        } else {
            total_debit += entry.amount;
        }
    }

    let transactions = scenario
        .entries
        .iter()
        .map(|entry| VisibleTransaction {
            date: entry.date,
            kind: entry.kind,
            reference: entry.reference.clone(),
            amount: entry.amount,
            is_credit: entry.kind.is_credit(),
            is_debit: entry.kind.is_debit(),
            po_number: schema
                .shows_po_number
                .then(|| entry.po_number.clone())
                .flatten(),
            due_date: schema.shows_due_date.then_some(entry.due_date).flatten(),
        })
        .collect();

    GroundTruthRecord {
        metadata: Metadata {
            statement_number: scenario.statement_number.clone(),
            statement_date: scenario.statement_date,
            pdf_style: schema.style.name().to_string(),
            generated_at,
        },
        company: scenario.supplier.clone(),
        customer: scenario.customer.clone(),
        balances: Balances {
            total_due: scenario.total_due,
            aging: scenario.aging.clone(),
        },
        transactions,
        ground_truth_labels: Labels {
            num_credits: credit_items.len(),
            credit_items,
            total_credit_amount: total_credit,
            total_debit_amount: total_debit,
            num_transactions: scenario.entries.len(),
            transaction_types: counts,
        },
    }
}
