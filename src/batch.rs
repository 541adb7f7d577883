// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::Catalog;
use crate::enrich::CompanyProvider;
use crate::error::StatementError;
use crate::ground_truth;
use crate::layout::StylePolicy;
use crate::models::Company;
use crate::render::StatementRenderer;
use crate::scenario::{GeneratorConfig, ScenarioGenerator};
use anyhow::{Context, Result};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub out_dir: PathBuf,
    pub count: usize,
    /// Inclusive per-item transaction-count range.
    pub tx_range: (usize, usize),
    pub policy: StylePolicy,
    /// Whether to write the paired ground-truth file for each document.
    pub ground_truth: bool,
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), StatementError> {
        if self.count < 1 {
            return Err(StatementError::InvalidConfiguration(
                "batch count must be at least 1".into(),
            ));
        }
        let (lo, hi) = self.tx_range;
        if lo < 1 || hi < lo {
            return Err(StatementError::InvalidConfiguration(format!(
                "invalid transaction-count range {}..={}",
                lo, hi
            )));
        }
        Ok(())
    }
}

/// Hands out one prefetched supplier per scenario. Lets a batch make a
/// single upstream enrichment request for all its items; once the pool runs
/// dry the catalog fills in.
struct SupplierPool<'a> {
    queue: RefCell<VecDeque<Company>>,
    catalog: &'a Catalog,
}

impl CompanyProvider for SupplierPool<'_> {
    fn companies(&self, count: usize, rng: &mut StdRng) -> Vec<Company> {
        let mut queue = self.queue.borrow_mut();
        (0..count)
            .map(|_| {
                queue
                    .pop_front()
                    .unwrap_or_else(|| self.catalog.sample_company(rng))
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct BatchSummary {
    pub generated: usize,
    pub failed: usize,
    pub manifest_path: PathBuf,
}

/// Runs one batch: per item, synthesize a scenario, pick a style, render the
/// document, and write the paired ground-truth file. Item failures are
/// recorded in the manifest and skipped; only setup errors abort the batch.
/// A document/ground-truth pair is written entirely or not at all.
pub fn run_batch(
    catalog: &Catalog,
    provider: &dyn CompanyProvider,
    renderer: &dyn StatementRenderer,
    generator_config: GeneratorConfig,
    cfg: &BatchConfig,
) -> Result<BatchSummary> {
    cfg.validate()?;
    fs::create_dir_all(&cfg.out_dir)
        .with_context(|| format!("Create output dir {}", cfg.out_dir.display()))?;

    // Batch-level choices (tx counts, random styles) draw from their own
    // stream so scenario content for a given seed is stable across policies.
    let mut batch_rng = match generator_config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };
    let pool = SupplierPool {
        queue: RefCell::new(provider.companies(cfg.count, &mut batch_rng).into()),
        catalog,
    };
    let mut generator = ScenarioGenerator::new(catalog, &pool, generator_config)?;

    let manifest_path = cfg.out_dir.join("manifest.csv");
    let mut manifest = csv::Writer::from_path(&manifest_path)
        .with_context(|| format!("Create manifest at {}", manifest_path.display()))?;
    manifest.write_record([
        "sequence",
        "style",
        "statement_number",
        "total_due",
        "document",
        "ground_truth",
        "status",
        "error",
    ])?;

    let mut generated = 0usize;
    let mut failed = 0usize;

    for i in 0..cfg.count {
        let style = cfg.policy.select(i, &mut batch_rng);
        let tx_count = batch_rng.gen_range(cfg.tx_range.0..=cfg.tx_range.1);
        let scenario = generator.generate(tx_count)?;
        let schema = style.schema();

        let base = format!("statement_{:03}_{}", i + 1, style.name());
        let doc_path = cfg
            .out_dir
            .join(format!("{}.{}", base, renderer.extension()));
        let gt_path = cfg.out_dir.join(format!("{}_ground_truth.json", base));

        let outcome = renderer.render(&scenario, &schema, &doc_path).and_then(|_| {
            if !cfg.ground_truth {
                return Ok(());
            }
            let record = ground_truth::project(&scenario, &schema, Utc::now());
            let body = serde_json::to_string_pretty(&record).map_err(|e| {
                StatementError::RenderFailure {
                    path: gt_path.clone(),
                    source: std::io::Error::other(e),
                }
            })?;
            fs::write(&gt_path, body).map_err(|source| StatementError::RenderFailure {
                path: gt_path.clone(),
                source,
            })
        });

        match outcome {
            Ok(()) => {
                println!("Generated: {}", doc_path.display());
                if cfg.ground_truth {
                    println!("  Ground truth: {}", gt_path.display());
                }
                manifest.write_record([
                    (i + 1).to_string(),
                    style.name().to_string(),
                    scenario.statement_number.clone(),
                    format!("{:.2}", scenario.total_due),
                    doc_path.display().to_string(),
                    if cfg.ground_truth {
                        gt_path.display().to_string()
                    } else {
                        String::new()
                    },
                    "ok".to_string(),
                    String::new(),
                ])?;
                generated += 1;
            }
            Err(e) => {
                // Keep the pair atomic: drop whichever half made it to disk.
                let _ = fs::remove_file(&doc_path);
                let _ = fs::remove_file(&gt_path);
                eprintln!("Error generating {}: {}", doc_path.display(), e);
                manifest.write_record([
                    (i + 1).to_string(),
                    style.name().to_string(),
                    scenario.statement_number.clone(),
                    format!("{:.2}", scenario.total_due),
                    String::new(),
                    String::new(),
                    "error".to_string(),
                    e.to_string(),
                ])?;
                failed += 1;
            }
        }
    }

    manifest.flush()?;
    Ok(BatchSummary {
        generated,
        failed,
        manifest_path,
    })
}
