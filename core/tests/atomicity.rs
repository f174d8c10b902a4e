//! A failed batch write must leave no trace.

use brokerage_core::{
    clock::SeedClock,
    config::GeneratorConfig,
    credentials::Sha256Hasher,
    fixture_seeder::{FixtureGenerator, SeedOutcome},
    model::Review,
    reference_seeder::ReferenceCatalogSeeder,
    rng::RngBank,
    store::{EntityKind, SeedRun, SeedStore},
};

const NOW: i64 = 1_700_000_000;

fn store_with_catalog() -> SeedStore {
    let mut store = SeedStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    ReferenceCatalogSeeder::run(&mut store, &RngBank::new(5)).expect("catalog");
    store
}

fn run_record(run_id: &str) -> SeedRun {
    SeedRun {
        run_id: run_id.into(),
        seed: 5,
        version: "0.1.0-test".into(),
        generated_at: SeedClock::from_unix(NOW).now(),
        summary: "{}".into(),
    }
}

#[test]
fn dangling_review_rolls_back_whole_batch() {
    let mut store = store_with_catalog();
    let before = store.counts().unwrap();

    let pools = store.reference_pools().unwrap();
    let generator =
        FixtureGenerator::new(GeneratorConfig::default_test(), Sha256Hasher::default()).unwrap();
    let mut batch = generator.generate(&pools, &SeedClock::from_unix(NOW), &RngBank::new(5));
    assert!(!batch.persons.is_empty());

    // Persons, agents, holdings and appointments are written before reviews,
    // so this fails well into the batch.
    let person = &batch.persons[0];
    let agent = &batch.agents[0];
    batch.reviews.push(Review {
        review_id: "review-without-appointment".into(),
        appointment_id: "no-such-appointment".into(),
        user_id: person.user_id.clone(),
        agent_id: agent.agent_id.clone(),
        rating: 4,
        comment: "orphan".into(),
    });

    let result = store.persist_batch(&run_record("seed-fail"), &batch);
    assert!(result.is_err(), "foreign key violation should surface");
    assert_eq!(store.counts().unwrap(), before, "all staged rows must roll back");
}

#[test]
fn failure_in_last_table_still_rolls_back() {
    let mut store = store_with_catalog();
    let pools = store.reference_pools().unwrap();
    let generator = FixtureGenerator::new(
        GeneratorConfig {
            claim_probability: 1.0,
            ..GeneratorConfig::default_test()
        },
        Sha256Hasher::default(),
    )
    .unwrap();
    let batch = generator.generate(&pools, &SeedClock::from_unix(NOW), &RngBank::new(6));
    assert!(!batch.claims.is_empty());

    // A run id that already exists makes the final insert fail after every
    // entity row has been staged.
    store
        .persist_batch(&run_record("taken"), &Default::default())
        .unwrap();
    let before = store.counts().unwrap();

    let result = store.persist_batch(&run_record("taken"), &batch);
    assert!(result.is_err());
    assert_eq!(store.counts().unwrap(), before);
}

#[test]
fn successful_batch_becomes_visible_at_once() {
    let mut store = store_with_catalog();
    let generator =
        FixtureGenerator::new(GeneratorConfig::default_test(), Sha256Hasher::default()).unwrap();
    let outcome = generator
        .run(&mut store, &SeedClock::from_unix(NOW), &RngBank::new(5))
        .unwrap();
    let SeedOutcome::Seeded { summary, .. } = outcome else {
        panic!("expected seeded outcome");
    };

    let counts = store.counts().unwrap();
    let total_fixture_rows: u64 = counts
        .iter()
        .filter(|(kind, _)| {
            !matches!(
                kind,
                EntityKind::Company | EntityKind::Policy | EntityKind::SeedRun
            )
        })
        .map(|(_, n)| *n)
        .sum();
    assert_eq!(total_fixture_rows, summary.total() as u64);
}
