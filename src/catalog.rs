// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Company, Customer};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Static reference pools used when no enrichment data is available.
/// Loaded once per process and only ever borrowed.
pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

pub struct Catalog {
    pub companies: Vec<Company>,
    pub customers: Vec<Customer>,
    pub adjustment_reasons: Vec<&'static str>,
}

impl Catalog {
    fn builtin() -> Catalog {
        fn company(name: &str, address: &str, phone: &str, email: &str) -> Company {
            Company {
                name: name.to_string(),
                address: address.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
            }
        }
        fn customer(name: &str, address: &str, account: &str) -> Customer {
            Customer {
                name: name.to_string(),
                address: address.to_string(),
                account: account.to_string(),
            }
        }

        Catalog {
            companies: vec![
                company(
                    "Northern Foods Supply Co.",
                    "1234 Industrial Blvd\nToronto ON M5V 2T6",
                    "(416) 555-0123",
                    "ar@northernfoods.ca",
                ),
                company(
                    "Pacific Seafood Distributors",
                    "890 Harbor Drive\nVancouver BC V6B 4N9",
                    "(604) 555-0456",
                    "accounts@pacificseafood.ca",
                ),
                company(
                    "Prairie Grain Merchants Ltd.",
                    "456 Wheat Avenue\nWinnipeg MB R3C 0V8",
                    "(204) 555-0789",
                    "billing@prairiegrain.ca",
                ),
                company(
                    "Atlantic Dairy Products Inc.",
                    "321 Coastal Road\nHalifax NS B3J 1P3",
                    "(902) 555-0321",
                    "finance@atlanticdairy.ca",
                ),
                company(
                    "Mountain Fresh Produce Ltd.",
                    "567 Valley Road\nCalgary AB T2P 1J9",
                    "(403) 555-0654",
                    "receivables@mountainfresh.ca",
                ),
                company(
                    "Great Lakes Equipment Co.",
                    "789 Lakeshore Blvd\nHamilton ON L8P 4X1",
                    "(905) 555-0987",
                    "ar@greatlakesequip.ca",
                ),
                company(
                    "Quebec Artisan Foods",
                    "234 Rue Saint-Laurent\nMontreal QC H2Y 2Y3",
                    "(514) 555-0234",
                    "comptes@quebecartisan.ca",
                ),
                company(
                    "Western Machinery Parts",
                    "678 Industrial Park Way\nEdmonton AB T5J 3N8",
                    "(780) 555-0567",
                    "billing@westernmachinery.ca",
                ),
                company(
                    "Maritime Packaging Solutions",
                    "123 Shipyard Lane\nSaint John NB E2L 4L5",
                    "(506) 555-0890",
                    "accounts@maritimepack.ca",
                ),
                company(
                    "Central Canada Chemicals",
                    "345 Research Drive\nOttawa ON K1N 6N5",
                    "(613) 555-0432",
                    "finance@centralchem.ca",
                ),
            ],
            customers: vec![
                customer(
                    "SOBEYS INC.",
                    "115 King Street\nStellarton NS B0K 1S0",
                    "SOB001",
                ),
                customer(
                    "METRO INC.",
                    "11011 Maurice-Duplessis Blvd\nMontreal QC H1C 1V6",
                    "MET002",
                ),
                customer(
                    "LOBLAWS COMPANIES",
                    "1 President's Choice Circle\nBrampton ON L6Y 5S5",
                    "LOB003",
                ),
                customer(
                    "COSTCO WHOLESALE",
                    "415 West Hunt Club Road\nOttawa ON K2E 1C5",
                    "COS004",
                ),
                customer(
                    "WALMART CANADA",
                    "1940 Argentia Road\nMississauga ON L5N 1P9",
                    "WAL005",
                ),
            ],
            adjustment_reasons: vec![
                "Damage claim",
                "Returned goods",
                "Price adjustment",
                "Volume discount",
                "Early payment discount",
                "Late fee waiver",
            ],
        }
    }

    pub fn sample_company(&self, rng: &mut StdRng) -> Company {
        self.companies
            .choose(rng)
            .expect("catalog has companies")
            .clone()
    }

    pub fn sample_customer(&self, rng: &mut StdRng) -> Customer {
        self.customers
            .choose(rng)
            .expect("catalog has customers")
            .clone()
    }

    pub fn sample_adjustment_reason(&self, rng: &mut StdRng) -> String {
        self.adjustment_reasons
            .choose(rng)
            .expect("catalog has adjustment reasons")
            .to_string()
    }
}
