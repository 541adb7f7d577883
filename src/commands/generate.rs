// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::batch::{run_batch, BatchConfig};
use crate::catalog::CATALOG;
use crate::enrich::{CatalogProvider, CompanyProvider, RemoteProvider};
use crate::layout::{StatementStyle, StylePolicy};
use crate::render::TextRenderer;
use crate::scenario::GeneratorConfig;
use anyhow::Result;
use std::path::PathBuf;
use std::str::FromStr;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let out_dir = PathBuf::from(m.get_one::<String>("out").unwrap());
    let count: usize = *m.get_one::<usize>("count").unwrap();
    let min_tx: usize = *m.get_one::<usize>("min-tx").unwrap();
    let max_tx: usize = *m.get_one::<usize>("max-tx").unwrap();

    let policy = if let Some(name) = m.get_one::<String>("style") {
        StylePolicy::Fixed(StatementStyle::from_str(name)?)
    } else if m.get_flag("random-style") {
        StylePolicy::Random
    } else {
        StylePolicy::Rotate
    };

    let generator_config = GeneratorConfig {
        seed: m.get_one::<u64>("seed").copied(),
        reference_date: m
            .get_one::<String>("date")
            .map(|s| crate::utils::parse_date(s))
            .transpose()?,
        ..GeneratorConfig::default()
    };

    let cfg = BatchConfig {
        out_dir,
        count,
        tx_range: (min_tx, max_tx),
        policy,
        ground_truth: !m.get_flag("no-ground-truth"),
    };

    let renderer = TextRenderer;
    let catalog_provider;
    let remote_provider;
    let provider: &dyn CompanyProvider = if m.get_flag("enrich") {
        remote_provider = RemoteProvider::from_env(&CATALOG);
        &remote_provider
    } else {
        catalog_provider = CatalogProvider::new(&CATALOG);
        &catalog_provider
    };

    let summary = run_batch(&CATALOG, provider, &renderer, generator_config, &cfg)?;
    println!(
        "Generated {} statements ({} failed); manifest at {}",
        summary.generated,
        summary.failed,
        summary.manifest_path.display()
    );
    Ok(())
}
