//! Cross-entity invariants of a generated and persisted fixture batch.

use brokerage_core::{
    clock::SeedClock,
    config::GeneratorConfig,
    credentials::Sha256Hasher,
    fixture_seeder::{FixtureBatch, FixtureGenerator, SeedOutcome},
    model::{AppointmentStatus, ClaimStatus, FeedbackStatus, HoldingStatus},
    reference_seeder::ReferenceCatalogSeeder,
    rng::RngBank,
    store::{EntityKind, SeedStore},
};
use chrono::{Duration, Timelike};
use std::collections::{HashMap, HashSet};

const NOW: i64 = 1_700_000_000;

fn seeded_store(seed: u64) -> SeedStore {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut store = SeedStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    ReferenceCatalogSeeder::run(&mut store, &RngBank::new(seed)).expect("reference catalog");
    store
}

fn big_batch(seed: u64) -> FixtureBatch {
    let store = seeded_store(seed);
    let pools = store.reference_pools().unwrap();
    let generator = FixtureGenerator::new(
        GeneratorConfig {
            user_count: 300,
            agent_count: 20,
            ..GeneratorConfig::default()
        },
        Sha256Hasher::default(),
    )
    .unwrap();
    generator.generate(&pools, &SeedClock::from_unix(NOW), &RngBank::new(seed))
}

#[test]
fn memberships_never_repeat_a_company_for_a_person() {
    let batch = big_batch(11);
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for m in &batch.memberships {
        assert!(
            seen.insert((m.user_id.as_str(), m.company_id.as_str())),
            "duplicate membership {} -> {}",
            m.user_id,
            m.company_id
        );
    }
    assert!(!batch.memberships.is_empty());
}

#[test]
fn reviews_only_on_completed_appointments() {
    let batch = big_batch(12);
    let status: HashMap<&str, AppointmentStatus> = batch
        .appointments
        .iter()
        .map(|a| (a.appointment_id.as_str(), a.status))
        .collect();

    let mut reviewed = HashSet::new();
    for r in &batch.reviews {
        assert_eq!(status[r.appointment_id.as_str()], AppointmentStatus::Completed);
        assert!(reviewed.insert(&r.appointment_id), "second review for one appointment");
        assert!((3..=5).contains(&r.rating));
    }
    assert!(!batch.reviews.is_empty(), "300 users should produce some reviews");
}

#[test]
fn disputes_only_on_rejected_claims() {
    let batch = big_batch(13);
    let claims: HashMap<&str, (&str, ClaimStatus)> = batch
        .claims
        .iter()
        .map(|c| (c.claim_id.as_str(), (c.user_id.as_str(), c.status)))
        .collect();

    for d in &batch.disputes {
        let (user, status) = claims[d.claim_id.as_str()];
        assert_eq!(status, ClaimStatus::Rejected);
        assert_eq!(user, d.user_id);
    }
    assert!(!batch.disputes.is_empty(), "300 users should produce some disputes");
}

#[test]
fn admin_response_present_iff_resolved() {
    let batch = big_batch(14);
    for f in &batch.feedback {
        match f.status {
            FeedbackStatus::Resolved => {
                assert!(f.admin_response.as_deref().is_some_and(|r| !r.is_empty()))
            }
            FeedbackStatus::Open => assert!(f.admin_response.is_none()),
        }
    }
}

#[test]
fn attribute_ranges_hold() {
    let batch = big_batch(15);
    let now = SeedClock::from_unix(NOW).now();

    for p in &batch.persons {
        assert!(p.income >= 0.0);
        assert!(p.is_active && p.is_verified);
    }
    for a in &batch.agents {
        assert!((3.5..=5.0).contains(&a.rating), "rating {}", a.rating);
    }
    for h in &batch.holdings {
        assert!(h.purchased_at <= now);
        assert!(h.purchased_at >= now - Duration::days(500));
        assert!(HoldingStatus::ALL.contains(&h.status));
    }
    for a in &batch.appointments {
        assert_eq!(a.end_time - a.start_time, Duration::hours(1));
        assert!(a.start_time >= now - Duration::days(31));
        assert!((9..=17).contains(&a.start_time.hour()), "start {}", a.start_time);
        assert_eq!((a.start_time.minute(), a.start_time.second()), (0, 0));
    }
    for c in &batch.claims {
        assert!((5_000.0..100_000.0).contains(&c.amount), "amount {}", c.amount);
        assert!((0.0..100.0).contains(&c.fraud_score));
        assert!(c.filed_at <= now && c.filed_at >= now - Duration::days(365));
    }
    for r in &batch.reminders {
        assert!(r.scheduled_at >= now);
        assert!(r.scheduled_at <= now + Duration::days(15));
    }
}

#[test]
fn exactly_one_reminder_per_person() {
    let batch = big_batch(16);
    let mut per_person: HashMap<&str, usize> = HashMap::new();
    for r in &batch.reminders {
        *per_person.entry(r.user_id.as_str()).or_default() += 1;
    }
    assert_eq!(per_person.len(), batch.persons.len());
    assert!(per_person.values().all(|n| *n == 1));
}

#[test]
fn persisted_run_passes_integrity_audit() {
    let mut store = seeded_store(17);
    let generator =
        FixtureGenerator::new(GeneratorConfig::default_test(), Sha256Hasher::default()).unwrap();
    let outcome = generator
        .run(&mut store, &SeedClock::from_unix(NOW), &RngBank::new(17))
        .expect("seed run");

    let SeedOutcome::Seeded { summary, run_id } = outcome else {
        panic!("expected a seeded outcome");
    };
    assert_eq!(store.count(EntityKind::Person).unwrap(), summary.persons as u64);
    assert_eq!(store.count(EntityKind::Review).unwrap(), summary.reviews as u64);
    assert_eq!(store.count(EntityKind::Reminder).unwrap(), summary.persons as u64);

    let runs = store.seed_runs().unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].run_id, run_id);
    assert_eq!(runs[0].seed, 17);

    let report = store.audit(60).unwrap();
    assert!(report.is_clean(), "audit found violations: {report:?}");
}
