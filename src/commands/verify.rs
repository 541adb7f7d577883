// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ground_truth::GroundTruthRecord;
use crate::utils::pretty_table;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let dir = m.get_one::<String>("dir").unwrap();
    let rows = check_dir(Path::new(dir))?;
    if rows.is_empty() {
        println!("verify: no issues found");
    } else {
        println!("{}", pretty_table(&["File", "Issue", "Detail"], rows));
    }
    Ok(())
}

/// Re-reads every `*_ground_truth.json` under `dir` and checks the ledger
/// invariants. Returns one row per violation.
pub fn check_dir(dir: &Path) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("Read directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !name.ends_with("_ground_truth.json") {
            continue;
        }
        let body = std::fs::read_to_string(&path)
            .with_context(|| format!("Read {}", path.display()))?;
        let record: GroundTruthRecord = serde_json::from_str(&body)
            .with_context(|| format!("Parse {}", path.display()))?;
        for (issue, detail) in check_record(&record) {
            rows.push(vec![name.clone(), issue, detail]);
        }
    }
    Ok(rows)
}

/// The §-by-§ invariant checks for one record.
pub fn check_record(record: &GroundTruthRecord) -> Vec<(String, String)> {
    let mut issues = Vec::new();
    let labels = &record.ground_truth_labels;
    let aging = &record.balances.aging;

    let mut credit_sum = Decimal::ZERO;
    let mut debit_sum = Decimal::ZERO;
    for tx in &record.transactions {
        if tx.is_credit == tx.is_debit {
            issues.push((
                "credit_debit_flags".into(),
                format!("{} is_credit={} is_debit={}", tx.reference, tx.is_credit, tx.is_debit),
            ));
        }
        if tx.amount <= Decimal::ZERO {
            issues.push(("non_positive_amount".into(), tx.reference.clone()));
        }
        if tx.date > record.metadata.statement_date {
            issues.push((
                "date_after_statement".into(),
                format!("{} on {}", tx.reference, tx.date),
            ));
        }
        if tx.is_credit {
            credit_sum += tx.amount;
        } else {
            debit_sum += tx.amount;
        }
    }

    if aging.total() != record.balances.total_due {
        issues.push((
            "aging_total_mismatch".into(),
            format!("buckets {} vs total_due {}", aging.total(), record.balances.total_due),
        ));
    }
    // Canonical reconciliation law: the ledger opens at zero.
    if debit_sum - credit_sum != record.balances.total_due {
        issues.push((
            "reconciliation_mismatch".into(),
            format!(
                "debits {} - credits {} != total_due {}",
                debit_sum, credit_sum, record.balances.total_due
            ),
        ));
    }
    if labels.total_debit_amount != debit_sum || labels.total_credit_amount != credit_sum {
        issues.push((
            "label_sums_mismatch".into(),
            format!(
                "labels {}/{} vs ledger {}/{}",
                labels.total_debit_amount, labels.total_credit_amount, debit_sum, credit_sum
            ),
        ));
    }
    if labels.num_transactions != record.transactions.len() {
        issues.push((
            "transaction_count_mismatch".into(),
            format!("{} vs {}", labels.num_transactions, record.transactions.len()),
        ));
    }
    if labels.transaction_types.total() != labels.num_transactions {
        issues.push((
            "type_counts_mismatch".into(),
            format!(
                "{} vs {}",
                labels.transaction_types.total(),
                labels.num_transactions
            ),
        ));
    }
    if labels.num_credits != labels.credit_items.len() {
        issues.push((
            "credit_count_mismatch".into(),
            format!("{} vs {}", labels.num_credits, labels.credit_items.len()),
        ));
    }

    issues
}
