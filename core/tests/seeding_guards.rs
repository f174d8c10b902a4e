//! Idempotency guard and reference-data precondition.

use brokerage_core::{
    clock::SeedClock,
    config::GeneratorConfig,
    credentials::Sha256Hasher,
    fixture_seeder::{FixtureGenerator, SeedOutcome, SkipReason},
    model::{Company, ReferencePools},
    reference_seeder::{ReferenceCatalogSeeder, ReferenceOutcome},
    rng::RngBank,
    store::{EntityKind, SeedStore},
};

fn empty_store() -> SeedStore {
    let store = SeedStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

fn generator(config: GeneratorConfig) -> FixtureGenerator<Sha256Hasher> {
    FixtureGenerator::new(config, Sha256Hasher::default()).unwrap()
}

#[test]
fn second_run_over_threshold_writes_nothing() {
    let mut store = empty_store();
    let bank = RngBank::new(42);
    ReferenceCatalogSeeder::run(&mut store, &bank).unwrap();

    // 40 users against a threshold of 30: the first run crosses it.
    let gen = generator(GeneratorConfig {
        person_threshold: 30,
        ..GeneratorConfig::default_test()
    });
    let first = gen
        .run(&mut store, &SeedClock::from_unix(1_700_000_000), &bank)
        .unwrap();
    assert!(matches!(first, SeedOutcome::Seeded { .. }));

    let before = store.counts().unwrap();
    let second = gen
        .run(&mut store, &SeedClock::from_unix(1_700_086_400), &bank)
        .unwrap();
    assert_eq!(
        second,
        SeedOutcome::Skipped(SkipReason::AlreadySeeded {
            existing: 40,
            threshold: 30
        })
    );
    assert_eq!(store.counts().unwrap(), before, "skipped run must not write");
}

#[test]
fn run_below_threshold_adds_a_second_batch() {
    let mut store = empty_store();
    let bank = RngBank::new(8);
    ReferenceCatalogSeeder::run(&mut store, &bank).unwrap();

    // Threshold 100, 40 users per run: the second run is still allowed.
    let gen = generator(GeneratorConfig {
        person_threshold: 100,
        ..GeneratorConfig::default_test()
    });
    gen.run(&mut store, &SeedClock::from_unix(1_700_000_000), &bank)
        .unwrap();
    let second = gen
        .run(&mut store, &SeedClock::from_unix(1_700_000_600), &bank)
        .unwrap();

    assert!(matches!(second, SeedOutcome::Seeded { .. }));
    assert_eq!(store.count(EntityKind::Person).unwrap(), 80);
    assert_eq!(store.count(EntityKind::SeedRun).unwrap(), 2);
    assert!(store.audit(60).unwrap().is_clean());
}

#[test]
fn empty_policy_pool_is_a_silent_skip() {
    let mut store = empty_store();
    // Companies exist, policies do not.
    store
        .persist_reference(&ReferencePools {
            companies: vec![Company {
                company_id: "co-1".into(),
                name: "Lonely Insurer".into(),
                claim_settlement_ratio: 0.9,
            }],
            policies: vec![],
        })
        .unwrap();

    let outcome = generator(GeneratorConfig::default_test())
        .run(&mut store, &SeedClock::from_unix(1_700_000_000), &RngBank::new(1))
        .expect("missing reference data is not an error");

    assert_eq!(
        outcome,
        SeedOutcome::Skipped(SkipReason::MissingReferenceData {
            companies: 1,
            policies: 0
        })
    );
    assert_eq!(store.count(EntityKind::Person).unwrap(), 0);
    assert_eq!(store.count(EntityKind::Agent).unwrap(), 0);
    assert_eq!(store.count(EntityKind::SeedRun).unwrap(), 0);
}

#[test]
fn completely_empty_catalog_is_reported() {
    let mut store = empty_store();
    let outcome = generator(GeneratorConfig::default_test())
        .run(&mut store, &SeedClock::from_unix(1_700_000_000), &RngBank::new(1))
        .unwrap();
    assert!(matches!(
        outcome,
        SeedOutcome::Skipped(SkipReason::MissingReferenceData { companies: 0, policies: 0 })
    ));
}

#[test]
fn reference_catalog_seeds_once() {
    let mut store = empty_store();
    let bank = RngBank::new(3);

    let first = ReferenceCatalogSeeder::run(&mut store, &bank).unwrap();
    let ReferenceOutcome::Seeded { companies, policies } = first else {
        panic!("expected catalog to be seeded, got {first:?}");
    };
    assert_eq!(store.count(EntityKind::Company).unwrap(), companies as u64);
    assert_eq!(store.count(EntityKind::Policy).unwrap(), policies as u64);

    let second = ReferenceCatalogSeeder::run(&mut store, &bank).unwrap();
    assert_eq!(
        second,
        ReferenceOutcome::Skipped {
            existing_companies: companies as u64
        }
    );
    assert_eq!(store.count(EntityKind::Policy).unwrap(), policies as u64);
}
