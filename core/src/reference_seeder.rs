//! Reference catalog: the insurers and policies fixtures bind to.
//!
//! Runs before the fixture generator and only on an empty catalog.

use crate::{
    error::SeedResult,
    model::{Company, Policy, PolicyType, ReferencePools},
    name_generator::NameGenerator,
    rng::{FixtureRng, RngBank, StreamSlot},
    store::{EntityKind, SeedStore},
};
use serde::Serialize;

/// Per-type pricing bands: (premium range, coverage range, term years).
fn pricing(policy_type: PolicyType) -> ((f64, f64), (f64, f64), u32) {
    match policy_type {
        PolicyType::Health => ((8_000.0, 30_000.0), (300_000.0, 1_500_000.0), 1),
        PolicyType::Life => ((12_000.0, 60_000.0), (2_500_000.0, 20_000_000.0), 20),
        PolicyType::Motor => ((4_000.0, 25_000.0), (200_000.0, 1_200_000.0), 1),
        PolicyType::Travel => ((800.0, 5_000.0), (100_000.0, 800_000.0), 1),
        PolicyType::Home => ((3_000.0, 18_000.0), (1_000_000.0, 10_000_000.0), 5),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReferenceOutcome {
    Seeded { companies: usize, policies: usize },
    Skipped { existing_companies: u64 },
}

pub struct ReferenceCatalogSeeder;

impl ReferenceCatalogSeeder {
    /// Seed the catalog unless any company already exists.
    pub fn run(store: &mut SeedStore, bank: &RngBank) -> SeedResult<ReferenceOutcome> {
        let existing = store.count(EntityKind::Company)?;
        if existing > 0 {
            log::info!("reference: {existing} companies already present, skipping");
            return Ok(ReferenceOutcome::Skipped {
                existing_companies: existing,
            });
        }

        let catalog = Self::build_catalog(bank);
        store.persist_reference(&catalog)?;
        log::info!(
            "reference: seeded {} companies, {} policies",
            catalog.companies.len(),
            catalog.policies.len()
        );
        Ok(ReferenceOutcome::Seeded {
            companies: catalog.companies.len(),
            policies: catalog.policies.len(),
        })
    }

    /// One company per curated insurer name, one policy per type each.
    pub fn build_catalog(bank: &RngBank) -> ReferencePools {
        let mut rng = bank.for_stream(StreamSlot::Reference);
        let mut pools = ReferencePools::default();

        for name in NameGenerator::insurer_names() {
            let company = Company {
                company_id: rng.next_uuid().to_string(),
                name: name.to_string(),
                claim_settlement_ratio: (rng.range_f64(0.85, 0.99) * 1000.0).round() / 1000.0,
            };
            for policy_type in PolicyType::ALL {
                pools.policies.push(Self::policy_for(&mut rng, &company, policy_type));
            }
            pools.companies.push(company);
        }
        pools
    }

    fn policy_for(rng: &mut FixtureRng, company: &Company, policy_type: PolicyType) -> Policy {
        let ((p_lo, p_hi), (c_lo, c_hi), term_years) = pricing(policy_type);
        // Whole rupees; both ranges start well above zero.
        let premium = rng.range_f64(p_lo, p_hi).round();
        let coverage = (rng.range_f64(c_lo, c_hi) / 1000.0).round() * 1000.0;
        let label = match policy_type {
            PolicyType::Health => "Health Shield",
            PolicyType::Life => "Term Life Secure",
            PolicyType::Motor => "Motor Comprehensive",
            PolicyType::Travel => "Travel Guard",
            PolicyType::Home => "Home Protect",
        };
        let brand = company.name.split_whitespace().next().unwrap_or("");
        Policy {
            policy_id: rng.next_uuid().to_string(),
            company_id: company.company_id.clone(),
            name: format!("{brand} {label}"),
            policy_type,
            premium,
            coverage,
            term_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_type_per_company() {
        let pools = ReferenceCatalogSeeder::build_catalog(&RngBank::new(1));
        assert_eq!(pools.companies.len(), NameGenerator::insurer_names().len());
        assert_eq!(
            pools.policies.len(),
            pools.companies.len() * PolicyType::ALL.len()
        );
        for policy in &pools.policies {
            assert!(policy.premium > 0.0 && policy.coverage > 0.0);
            assert!(pools.companies.iter().any(|c| c.company_id == policy.company_id));
        }
    }

    #[test]
    fn catalog_is_deterministic() {
        let a = ReferenceCatalogSeeder::build_catalog(&RngBank::new(77));
        let b = ReferenceCatalogSeeder::build_catalog(&RngBank::new(77));
        assert_eq!(a.companies, b.companies);
        assert_eq!(a.policies, b.policies);
    }
}
