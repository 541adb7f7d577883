// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rand::rngs::StdRng;
use rand::SeedableRng;
use statementforge::catalog::CATALOG;
use statementforge::enrich::{is_well_formed, CatalogProvider, CompanyProvider, RemoteProvider};

#[test]
fn catalog_pools_pass_the_shape_constraints() {
    for company in &CATALOG.companies {
        assert!(is_well_formed(company), "ill-shaped catalog entry {}", company.name);
    }
    for customer in &CATALOG.customers {
        assert!(!customer.name.is_empty());
        assert!(customer.address.contains('\n'));
        assert_eq!(customer.account.len(), 6);
    }
}

#[test]
fn catalog_provider_returns_the_requested_count() {
    let mut rng = StdRng::seed_from_u64(1);
    let provider = CatalogProvider::new(&CATALOG);
    for count in [1, 3, 10] {
        let companies = provider.companies(count, &mut rng);
        assert_eq!(companies.len(), count);
        assert!(companies.iter().all(is_well_formed));
    }
}

#[test]
fn remote_provider_without_credentials_falls_back_to_the_catalog() {
    let mut rng = StdRng::seed_from_u64(2);
    let provider = RemoteProvider::with_key(&CATALOG, None, "https://api.openai.com/v1".into());
    let companies = provider.companies(4, &mut rng);
    assert_eq!(companies.len(), 4);
    for company in &companies {
        assert!(is_well_formed(company));
        assert!(CATALOG.companies.contains(company));
    }
}

#[test]
fn remote_provider_with_unreachable_endpoint_falls_back() {
    let mut rng = StdRng::seed_from_u64(3);
    // Nothing listens here; both attempts fail and the catalog fills in.
    let provider = RemoteProvider::with_key(
        &CATALOG,
        Some("test-key".into()),
        "http://127.0.0.1:9".into(),
    );
    let companies = provider.companies(2, &mut rng);
    assert_eq!(companies.len(), 2);
    assert!(companies.iter().all(|c| CATALOG.companies.contains(c)));
}
