// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StatementError;
use crate::layout::{LayoutSchema, StatementStyle};
use crate::models::{LedgerEntry, Scenario};
use crate::utils::pretty_table;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt::Write as _;
use std::path::Path;

/// Rendering collaborator. Consumes a finished scenario; must not mutate it.
pub trait StatementRenderer {
    fn render(
        &self,
        scenario: &Scenario,
        schema: &LayoutSchema,
        dest: &Path,
    ) -> Result<(), StatementError>;

    /// File extension of the produced documents, without the dot.
    fn extension(&self) -> &'static str;
}

/// Plain-text page renderer. One fixed-width page per statement, laid out
/// per the style's schema. Fully deterministic: every displayed value is
/// derived from the scenario, never sampled.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl StatementRenderer for TextRenderer {
    fn render(
        &self,
        scenario: &Scenario,
        schema: &LayoutSchema,
        dest: &Path,
    ) -> Result<(), StatementError> {
        let page = render_page(scenario, schema);
        std::fs::write(dest, page).map_err(|source| StatementError::RenderFailure {
            path: dest.to_path_buf(),
            source,
        })
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

fn fmt_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

fn fmt_amount(d: Decimal) -> String {
    format!("{:.2}", d)
}

/// Displayed credit limit: total due rounded up to the next 5,000 step,
/// times four, floored at 50,000.
fn credit_limit(total_due: Decimal) -> Decimal {
    let step = Decimal::new(5_000_00, 2);
    let rounded = (total_due / step).ceil() * step;
    (rounded * Decimal::from(4)).max(Decimal::new(50_000_00, 2))
}

fn render_page(scenario: &Scenario, schema: &LayoutSchema) -> String {
    let mut page = String::new();
    let supplier = &scenario.supplier;
    let customer = &scenario.customer;

    // Header banner
    if schema.style == StatementStyle::BriggsEquipment {
        let _ = writeln!(page, "{:<52}{:>26}", supplier.name.to_uppercase(), schema.title);
    } else {
        let _ = writeln!(page, "{:<52}{:>26}", supplier.name, schema.title);
    }
    let _ = writeln!(page, "{}", "=".repeat(78));
    for line in supplier.address.lines() {
        let _ = writeln!(page, "{}", line);
    }
    let _ = writeln!(page, "Tel: {}", supplier.phone);
    let _ = writeln!(page, "{}", supplier.email);
    page.push('\n');

    // Recipient block
    let _ = writeln!(page, "SOLD TO:");
    let _ = writeln!(page, "{}", customer.name);
    for line in customer.address.lines() {
        let _ = writeln!(page, "{}", line);
    }
    let _ = writeln!(page, "ACCOUNT NO.: {}", customer.account);
    page.push('\n');

    // Statement box
    let _ = writeln!(page, "STATEMENT NO. {}", scenario.statement_number);
    let _ = writeln!(page, "DATE          {}", fmt_date(scenario.statement_date));
    let _ = writeln!(page, "TOTAL DUE     $ {}", fmt_amount(scenario.total_due));
    page.push('\n');

    if schema.aging_at_top {
        page.push_str(&aging_section(scenario, schema));
        page.push('\n');
    }

    page.push_str(&transaction_section(scenario, schema));
    page.push('\n');

    if schema.shows_credit_limit {
        let limit = credit_limit(scenario.total_due);
        let _ = writeln!(page, "Credit Limit:     {}", fmt_amount(limit));
        let _ = writeln!(
            page,
            "Credit Available: {}",
            fmt_amount(limit - scenario.total_due)
        );
        page.push('\n');
    }

    if !schema.aging_at_top {
        page.push_str(&aging_section(scenario, schema));
        page.push('\n');
    }

    page.push_str(&footer_section(scenario, schema));
    page
}

fn signed_display(entry: &LedgerEntry) -> String {
    fmt_amount(entry.signed_amount())
}

fn transaction_section(scenario: &Scenario, schema: &LayoutSchema) -> String {
    let rows: Vec<Vec<String>> = scenario
        .entries
        .iter()
        .map(|entry| match schema.style {
            StatementStyle::SheldonCreek => vec![
                fmt_date(entry.date),
                entry
                    .description
                    .clone()
                    .unwrap_or_else(|| entry.kind.label().to_string()),
                signed_display(entry),
                fmt_amount(entry.balance_after),
            ],
            StatementStyle::CulturesGenV => vec![
                entry.reference.clone(),
                fmt_date(entry.date),
                entry.kind.code().to_string(),
                entry.po_number.clone().unwrap_or_default(),
                entry.due_date.map(fmt_date).unwrap_or_default(),
                signed_display(entry),
            ],
            StatementStyle::ComeauSeaFoods => {
                let (debit, credit) = if entry.kind.is_debit() {
                    (fmt_amount(entry.amount), String::new())
                } else {
                    (String::new(), fmt_amount(entry.amount))
                };
                vec![
                    entry.reference.clone(),
                    fmt_date(entry.date),
                    debit,
                    credit,
                    fmt_amount(entry.balance_after),
                ]
            }
            StatementStyle::CinnabarValley => vec![
                fmt_date(entry.date),
                entry
                    .description
                    .clone()
                    .unwrap_or_else(|| entry.kind.label().to_string()),
                entry.reference.clone(),
                entry.po_number.clone().unwrap_or_default(),
                "Net 30 Days".to_string(),
                signed_display(entry),
                fmt_amount(entry.balance_after),
            ],
            StatementStyle::BriggsEquipment => {
                let age = entry.age_days(scenario.statement_date);
                vec![
                    fmt_date(entry.date),
                    entry.due_date.map(fmt_date).unwrap_or_default(),
                    entry.reference.clone(),
                    entry.po_number.clone().unwrap_or_default(),
                    signed_display(entry),
                    fmt_amount(entry.balance_after),
                    if age > 0 {
                        format!("{} DAYS", age)
                    } else {
                        String::new()
                    },
                ]
            }
        })
        .collect();

    let headers: &[&str] = match schema.style {
        StatementStyle::SheldonCreek => &["DATE", "DESCRIPTION", "AMOUNT", "OPEN AMOUNT"],
        StatementStyle::CulturesGenV => &[
            "DOCUMENT NUMBER",
            "DOCUMENT DATE",
            "TYPE",
            "REFERENCE/APPLIED NUMBER",
            "DUE DATE",
            "AMOUNT",
        ],
        StatementStyle::ComeauSeaFoods => &["Invoice", "Invoice Date", "Debit", "Credit", "Balance"],
        StatementStyle::CinnabarValley => &[
            "Date",
            "Description",
            "Invoice #",
            "PO#",
            "Terms",
            "Amount",
            "Outstanding",
        ],
        StatementStyle::BriggsEquipment => &[
            "INVOICED",
            "DUE",
            "INVOICE REFERENCES",
            "CUSTOMER REF. NO.",
            "INVOICE AMOUNT",
            "BALANCE DUE",
            "PAST DUE",
        ],
    };

    format!("{}\n", pretty_table(headers, rows))
}

fn aging_section(scenario: &Scenario, schema: &LayoutSchema) -> String {
    let aging = &scenario.aging;
    let (headers, values): (Vec<&str>, Vec<String>) = if schema.style
        == StatementStyle::BriggsEquipment
    {
        // Display-only split of the 90+ bucket across the 91-150/150+ cells.
        let older = (aging.days_90_plus * Decimal::new(6, 1)).round_dp(2);
        let oldest = aging.days_90_plus - older;
        (
            vec![
                "Balance",
                "CURRENT",
                "1-30 Days Past Due",
                "31-60 Days Past Due",
                "61-90 Days Past Due",
                "91-150 Days Past Due",
                "150+ Days Past Due",
            ],
            vec![
                fmt_amount(scenario.total_due),
                fmt_amount(aging.current),
                fmt_amount(aging.days_1_30),
                fmt_amount(aging.days_31_60),
                fmt_amount(aging.days_61_90),
                fmt_amount(older),
                fmt_amount(oldest),
            ],
        )
    } else {
        (
            vec![
                "Current Due",
                "1-30 Days Past Due",
                "31-60 Days Past Due",
                "61-90 Days Past Due",
                "90+ Days Past Due",
                "Amount Due",
            ],
            vec![
                fmt_amount(aging.current),
                fmt_amount(aging.days_1_30),
                fmt_amount(aging.days_31_60),
                fmt_amount(aging.days_61_90),
                fmt_amount(aging.days_90_plus),
                format!("$ {}", fmt_amount(scenario.total_due)),
            ],
        )
    };

    format!("{}\n", pretty_table(&headers, vec![values]))
}

fn footer_section(scenario: &Scenario, schema: &LayoutSchema) -> String {
    match schema.style {
        StatementStyle::SheldonCreek => format!(
            "THANK YOU FOR YOUR ORDER!\nPlease ensure payments are made payable to:\n{}\n",
            scenario.supplier.name.to_uppercase()
        ),
        StatementStyle::CulturesGenV => concat!(
            "IN - Invoice    DB - Debit Note    CR - Credit Note    IT - Interest Payable\n",
            "PY - Applied Receipt    ED - Earned Discount    AD - Adjustment    PI - Prepayment\n",
            "UC - Unapplied Cash    RF - Refund\n"
        )
        .to_string(),
        StatementStyle::ComeauSeaFoods => {
            "INTEREST AT THE RATE OF 2% WILL BE CHARGED ON UNPAID BALANCE\n".to_string()
        }
        StatementStyle::CinnabarValley => {
            format!("{}\n", scenario.supplier.email)
        }
        StatementStyle::BriggsEquipment => concat!(
            "Terms: Net 30 Days, unless otherwise prior specified in writing.\n",
            "Invoices are deemed correct unless errors are reported in writing within 15 days of invoice date.\n",
            "We Appreciate Your Business!\n"
        )
        .to_string(),
    }
}
