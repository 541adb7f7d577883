// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StatementError;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five fixed rendering styles, named after the real-world statements
/// they replicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementStyle {
    SheldonCreek,
    CulturesGenV,
    ComeauSeaFoods,
    CinnabarValley,
    BriggsEquipment,
}

impl StatementStyle {
    /// Fixed rotation order for batch generation.
    pub const ALL: [StatementStyle; 5] = [
        StatementStyle::SheldonCreek,
        StatementStyle::CulturesGenV,
        StatementStyle::ComeauSeaFoods,
        StatementStyle::CinnabarValley,
        StatementStyle::BriggsEquipment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StatementStyle::SheldonCreek => "SheldonCreek",
            StatementStyle::CulturesGenV => "CulturesGenV",
            StatementStyle::ComeauSeaFoods => "ComeauSeaFoods",
            StatementStyle::CinnabarValley => "CinnabarValley",
            StatementStyle::BriggsEquipment => "BriggsEquipment",
        }
    }

    /// Which scenario fields this style renders, plus cosmetic parameters.
    pub fn schema(self) -> LayoutSchema {
        match self {
            // Clean professional format: simple list with running balance,
            // credit-note reasons spelled out.
            StatementStyle::SheldonCreek => LayoutSchema {
                style: self,
                title: "Statement",
                accent: "#333333",
                shows_po_number: false,
                shows_due_date: false,
                shows_days_past_due: false,
                shows_running_balance: true,
                shows_description: true,
                shows_credit_limit: false,
                aging_at_top: false,
            },
            // Corporate format: document codes, PO references, due dates,
            // credit limit box.
            StatementStyle::CulturesGenV => LayoutSchema {
                style: self,
                title: "STATEMENT",
                accent: "#4A7C3C",
                shows_po_number: true,
                shows_due_date: true,
                shows_days_past_due: false,
                shows_running_balance: false,
                shows_description: false,
                shows_credit_limit: true,
                aging_at_top: false,
            },
            // Bold branding with split debit/credit columns and an interest
            // warning.
            StatementStyle::ComeauSeaFoods => LayoutSchema {
                style: self,
                title: "STATEMENT",
                accent: "#0066CC",
                shows_po_number: false,
                shows_due_date: false,
                shows_days_past_due: false,
                shows_running_balance: true,
                shows_description: false,
                shows_credit_limit: false,
                aging_at_top: false,
            },
            // Minimalist format with PO and terms columns.
            StatementStyle::CinnabarValley => LayoutSchema {
                style: self,
                title: "Statement",
                accent: "#1A1A1A",
                shows_po_number: true,
                shows_due_date: false,
                shows_days_past_due: false,
                shows_running_balance: true,
                shows_description: true,
                shows_credit_limit: true,
                aging_at_top: false,
            },
            // Branded banner, aging at the top, days-past-due column.
            StatementStyle::BriggsEquipment => LayoutSchema {
                style: self,
                title: "STATEMENT",
                accent: "#8B0000",
                shows_po_number: true,
                shows_due_date: true,
                shows_days_past_due: true,
                shows_running_balance: true,
                shows_description: false,
                shows_credit_limit: false,
                aging_at_top: true,
            },
        }
    }
}

impl fmt::Display for StatementStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatementStyle {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SheldonCreek" => Ok(StatementStyle::SheldonCreek),
            "CulturesGenV" => Ok(StatementStyle::CulturesGenV),
            "ComeauSeaFoods" => Ok(StatementStyle::ComeauSeaFoods),
            "CinnabarValley" => Ok(StatementStyle::CinnabarValley),
            "BriggsEquipment" => Ok(StatementStyle::BriggsEquipment),
            _ => Err(StatementError::InvalidConfiguration(format!(
                "unknown style '{}', expected one of {}",
                s,
                StatementStyle::ALL.map(|st| st.name()).join("|")
            ))),
        }
    }
}

/// Visible-field switches and cosmetics for one style. A schema never alters
/// scenario values, only what the renderer and the ground-truth projection
/// are allowed to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSchema {
    pub style: StatementStyle,
    pub title: &'static str,
    pub accent: &'static str,
    pub shows_po_number: bool,
    pub shows_due_date: bool,
    pub shows_days_past_due: bool,
    pub shows_running_balance: bool,
    pub shows_description: bool,
    pub shows_credit_limit: bool,
    pub aging_at_top: bool,
}

/// How a batch picks the style for each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePolicy {
    /// Every item uses the same style.
    Fixed(StatementStyle),
    /// Round-robin through the five styles so large batches are balanced.
    Rotate,
    /// Uniformly at random.
    Random,
}

impl StylePolicy {
    pub fn select(&self, index: usize, rng: &mut StdRng) -> StatementStyle {
        match self {
            StylePolicy::Fixed(style) => *style,
            StylePolicy::Rotate => StatementStyle::ALL[index % StatementStyle::ALL.len()],
            StylePolicy::Random => StatementStyle::ALL[rng.gen_range(0..StatementStyle::ALL.len())],
        }
    }
}
