// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Issuer of a statement. Address lines are embedded with '\n'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Recipient of a statement, identified by an account code like "SOB001".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub account: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Invoice,
    CreditNote,
    Payment,
    DebitNote,
}

impl TransactionKind {
    pub fn is_debit(self) -> bool {
        matches!(self, TransactionKind::Invoice | TransactionKind::DebitNote)
    }

    pub fn is_credit(self) -> bool {
        !self.is_debit()
    }

    /// Reference prefix, e.g. INV48213.
    pub fn prefix(self) -> &'static str {
        match self {
            TransactionKind::Invoice => "INV",
            TransactionKind::CreditNote => "CN",
            TransactionKind::Payment => "PY",
            TransactionKind::DebitNote => "DN",
        }
    }

    /// Two-letter document code used in the CulturesGenV legend.
    pub fn code(self) -> &'static str {
        match self {
            TransactionKind::Invoice => "IN",
            TransactionKind::CreditNote => "CR",
            TransactionKind::Payment => "PY",
            TransactionKind::DebitNote => "DB",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Invoice => "Invoice",
            TransactionKind::CreditNote => "Credit memo",
            TransactionKind::Payment => "Payment",
            TransactionKind::DebitNote => "Debit note",
        }
    }
}

/// One ledger line.
///
/// Invariants upheld by the synthesizer: amount is positive and quantized to
/// 2 dp; due_date is present iff the kind is Invoice; description is present
/// iff the kind is CreditNote; dates are non-decreasing in ledger order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub reference: String,
    pub amount: Decimal,
    pub due_date: Option<NaiveDate>,
    pub po_number: Option<String>,
    pub description: Option<String>,
    /// Net running balance after this entry. Rendered by four of the five
    /// styles; never part of ground truth.
    pub balance_after: Decimal,
}

impl LedgerEntry {
    /// Signed amount: debits positive, credits negative.
    pub fn signed_amount(&self) -> Decimal {
        if self.kind.is_debit() {
            self.amount
        } else {
            -self.amount
        }
    }

    /// Age in days relative to the statement date.
    pub fn age_days(&self, statement_date: NaiveDate) -> i64 {
        (statement_date - self.date).num_days()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBucket {
    Current,
    Days1To30,
    Days31To60,
    Days61To90,
    Days90Plus,
}

impl AgeBucket {
    pub fn for_age(days: i64) -> AgeBucket {
        if days <= 0 {
            AgeBucket::Current
        } else if days <= 30 {
            AgeBucket::Days1To30
        } else if days <= 60 {
            AgeBucket::Days31To60
        } else if days <= 90 {
            AgeBucket::Days61To90
        } else {
            AgeBucket::Days90Plus
        }
    }
}

/// Aging bucket totals. Each bucket is the signed sum (debits positive,
/// credits negative) of the entries whose age falls in the bucket, so
/// `total()` equals the statement's net open balance exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingSnapshot {
    pub current: Decimal,
    pub days_1_30: Decimal,
    pub days_31_60: Decimal,
    pub days_61_90: Decimal,
    pub days_90_plus: Decimal,
}

impl AgingSnapshot {
    pub fn add(&mut self, bucket: AgeBucket, signed_amount: Decimal) {
        let slot = match bucket {
            AgeBucket::Current => &mut self.current,
            AgeBucket::Days1To30 => &mut self.days_1_30,
            AgeBucket::Days31To60 => &mut self.days_31_60,
            AgeBucket::Days61To90 => &mut self.days_61_90,
            AgeBucket::Days90Plus => &mut self.days_90_plus,
        };
        *slot += signed_amount;
    }

    pub fn total(&self) -> Decimal {
        self.current + self.days_1_30 + self.days_31_60 + self.days_61_90 + self.days_90_plus
    }
}

/// Aggregate root for one generated statement. Immutable after synthesis:
/// layouts filter what is shown, never what is stored.
///
/// Reconciliation law: the ledger opens at zero, so
/// `total_due == sum of debits - sum of credits == aging.total()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub statement_number: String,
    pub statement_date: NaiveDate,
    pub supplier: Company,
    pub customer: Customer,
    pub entries: Vec<LedgerEntry>,
    pub aging: AgingSnapshot,
    pub total_due: Decimal,
}
