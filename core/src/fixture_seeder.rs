//! Volume fixture generator.
//!
//! Synthesizes users and agents bound to the existing reference catalog,
//! then each user's history: holdings, company memberships, bookings,
//! reviews, claims, dispute cases, feedback and a reminder. Child records
//! are only emitted when their parent's state allows it (a review needs a
//! completed booking, a dispute needs a rejected claim).
//!
//! Generation is pure; `run` adds the idempotency guard and writes the
//! batch in one transaction.

use crate::{
    clock::SeedClock,
    config::GeneratorConfig,
    credentials::CredentialHasher,
    error::SeedResult,
    model::{
        Agent, Appointment, AppointmentStatus, Claim, ClaimStatus, CompanyMembership,
        DisputeCase, Feedback, FeedbackStatus, Holding, HoldingStatus, Person, Priority,
        ReferencePools, Reminder, Review,
    },
    name_generator::NameGenerator,
    rng::{FixtureRng, RngBank, StreamSlot},
    store::{EntityKind, SeedRun, SeedStore},
    types::{EntityId, RunId},
    vocabulary,
};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const SECONDS_PER_DAY: u64 = 86_400;

/// Everything one generation pass produces, in write order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FixtureBatch {
    pub persons: Vec<Person>,
    pub agents: Vec<Agent>,
    pub holdings: Vec<Holding>,
    pub memberships: Vec<CompanyMembership>,
    pub appointments: Vec<Appointment>,
    pub reviews: Vec<Review>,
    pub claims: Vec<Claim>,
    pub disputes: Vec<DisputeCase>,
    pub feedback: Vec<Feedback>,
    pub reminders: Vec<Reminder>,
}

impl FixtureBatch {
    pub fn is_empty(&self) -> bool {
        self.summary().total() == 0
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            persons: self.persons.len(),
            agents: self.agents.len(),
            holdings: self.holdings.len(),
            memberships: self.memberships.len(),
            appointments: self.appointments.len(),
            reviews: self.reviews.len(),
            claims: self.claims.len(),
            disputes: self.disputes.len(),
            feedback: self.feedback.len(),
            reminders: self.reminders.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchSummary {
    pub persons: usize,
    pub agents: usize,
    pub holdings: usize,
    pub memberships: usize,
    pub appointments: usize,
    pub reviews: usize,
    pub claims: usize,
    pub disputes: usize,
    pub feedback: usize,
    pub reminders: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.persons
            + self.agents
            + self.holdings
            + self.memberships
            + self.appointments
            + self.reviews
            + self.claims
            + self.disputes
            + self.feedback
            + self.reminders
    }
}

/// Why a run wrote nothing. Neither case is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Enough people already exist.
    AlreadySeeded { existing: u64, threshold: u64 },
    /// The reference catalog must be seeded first.
    MissingReferenceData { companies: usize, policies: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    Seeded { run_id: RunId, summary: BatchSummary },
    Skipped(SkipReason),
}

pub struct FixtureGenerator<H: CredentialHasher> {
    config: GeneratorConfig,
    hasher: H,
}

impl<H: CredentialHasher> FixtureGenerator<H> {
    /// Rejects an invalid configuration up front; every generator holds a
    /// validated one.
    pub fn new(config: GeneratorConfig, hasher: H) -> SeedResult<Self> {
        config.validate()?;
        Ok(Self { config, hasher })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The guard, checked in order: volume threshold, then reference pools.
    pub fn check_preconditions(
        &self,
        existing_persons: u64,
        pools: &ReferencePools,
    ) -> Option<SkipReason> {
        if existing_persons >= self.config.person_threshold {
            return Some(SkipReason::AlreadySeeded {
                existing: existing_persons,
                threshold: self.config.person_threshold,
            });
        }
        if pools.is_empty() {
            return Some(SkipReason::MissingReferenceData {
                companies: pools.companies.len(),
                policies: pools.policies.len(),
            });
        }
        None
    }

    /// Guard, generate, and persist as one unit of work.
    pub fn run(
        &self,
        store: &mut SeedStore,
        clock: &SeedClock,
        bank: &RngBank,
    ) -> SeedResult<SeedOutcome> {
        let existing = store.count(EntityKind::Person)?;
        let pools = store.reference_pools()?;

        if let Some(reason) = self.check_preconditions(existing, &pools) {
            match &reason {
                SkipReason::AlreadySeeded { existing, threshold } => log::info!(
                    "fixtures: {existing} persons already present (threshold {threshold}), skipping"
                ),
                SkipReason::MissingReferenceData { companies, policies } => log::warn!(
                    "fixtures: reference catalog incomplete ({companies} companies, \
                     {policies} policies); seed companies and policies first"
                ),
            }
            return Ok(SeedOutcome::Skipped(reason));
        }

        let batch = self.generate(&pools, clock, bank);
        let summary = batch.summary();
        let run_id = format!("seed-{}-{}", bank.master_seed(), clock.now().timestamp());
        let run = SeedRun {
            run_id: run_id.clone(),
            seed: bank.master_seed(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: clock.now(),
            summary: serde_json::to_string(&summary)?,
        };

        store.persist_batch(&run, &batch)?;
        log::info!(
            "fixtures: run {run_id} committed {} rows ({} persons, {} agents)",
            summary.total(),
            summary.persons,
            summary.agents
        );
        Ok(SeedOutcome::Seeded { run_id, summary })
    }

    /// Build a batch without touching storage. Empty pools give an empty batch.
    pub fn generate(
        &self,
        pools: &ReferencePools,
        clock: &SeedClock,
        bank: &RngBank,
    ) -> FixtureBatch {
        let mut batch = FixtureBatch::default();
        if pools.is_empty() {
            return batch;
        }

        let mut ids = bank.for_stream_at(StreamSlot::Identity, clock.now().timestamp() as u64);
        let mut people_rng = bank.for_stream(StreamSlot::People);
        let mut agent_rng = bank.for_stream(StreamSlot::Agents);
        let mut activity_rng = bank.for_stream(StreamSlot::Activity);

        let credential = self.hasher.hash(&self.config.default_password);

        batch.persons = (0..self.config.user_count)
            .map(|_| self.synthesize_person(&mut people_rng, &mut ids, clock, &credential))
            .collect();
        batch.agents = (0..self.config.agent_count)
            .map(|_| self.synthesize_agent(&mut agent_rng, &mut ids, pools, &credential))
            .collect();
        log::debug!(
            "fixtures: synthesized {} persons, {} agents",
            batch.persons.len(),
            batch.agents.len()
        );

        let mut history = History::default();
        for person in &batch.persons {
            self.synthesize_history(
                person,
                &batch.agents,
                pools,
                clock,
                &mut activity_rng,
                &mut ids,
                &mut history,
            );
        }
        history.move_into(&mut batch);

        log::debug!("fixtures: generated {:?}", batch.summary());
        batch
    }

    fn synthesize_person(
        &self,
        rng: &mut FixtureRng,
        ids: &mut FixtureRng,
        clock: &SeedClock,
        credential: &str,
    ) -> Person {
        let cfg = &self.config;
        let user_id = new_id(ids);
        let (first, last) = NameGenerator::generate_name_parts(rng);
        Person {
            email: NameGenerator::email_for(first, last, &user_id[..8], vocabulary::EMAIL_DOMAIN),
            first_name: first.to_string(),
            last_name: last.to_string(),
            credential: credential.to_string(),
            region: rng.pick(vocabulary::REGIONS).to_string(),
            age: rng.between(cfg.age.min, cfg.age.max),
            income: rng.range_f64(cfg.income.min, cfg.income.max).floor(),
            dependents: rng.between(cfg.dependents.min, cfg.dependents.max),
            health_condition: rng.pick(vocabulary::HEALTH_CONDITIONS).to_string(),
            is_active: true,
            is_verified: true,
            created_at: clock.now(),
            user_id,
        }
    }

    fn synthesize_agent(
        &self,
        rng: &mut FixtureRng,
        ids: &mut FixtureRng,
        pools: &ReferencePools,
        credential: &str,
    ) -> Agent {
        let cfg = &self.config;
        let agent_id = new_id(ids);
        let (first, last) = NameGenerator::generate_name_parts(rng);
        let company = rng.pick(&pools.companies);
        // One decimal place; rounding cannot leave [min, max].
        let rating = (rng.range_f64(cfg.agent_rating.min, cfg.agent_rating.max) * 10.0).round()
            / 10.0;
        Agent {
            name: format!("{first} {last}"),
            email: NameGenerator::email_for(
                first,
                last,
                &agent_id[..8],
                vocabulary::AGENT_EMAIL_DOMAIN,
            ),
            credential: credential.to_string(),
            company_id: company.company_id.clone(),
            specialization: rng.pick(vocabulary::AGENT_SPECIALIZATIONS).to_string(),
            rating,
            experience_years: rng.between(
                cfg.agent_experience_years.min,
                cfg.agent_experience_years.max,
            ),
            is_active: true,
            agent_id,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn synthesize_history(
        &self,
        person: &Person,
        agents: &[Agent],
        pools: &ReferencePools,
        clock: &SeedClock,
        rng: &mut FixtureRng,
        ids: &mut FixtureRng,
        out: &mut History,
    ) {
        let cfg = &self.config;
        let now = clock.now();
        let midnight = clock.start_of_day();

        // Holdings, plus one membership per distinct company.
        let mut seen_companies: HashSet<&str> = HashSet::new();
        let mut held_policies: Vec<&str> = Vec::new();
        let holdings = rng.between(cfg.holdings_per_person.min, cfg.holdings_per_person.max);
        for _ in 0..holdings {
            let policy = rng.pick(&pools.policies);
            let back = rng.next_u64_below(u64::from(cfg.purchase_window_days) * SECONDS_PER_DAY);
            out.holdings.push(Holding {
                holding_id: new_id(ids),
                user_id: person.user_id.clone(),
                policy_id: policy.policy_id.clone(),
                status: *rng.pick(&HoldingStatus::ALL),
                premium: policy.premium,
                purchased_at: now - Duration::seconds(back as i64),
            });
            held_policies.push(&policy.policy_id);

            if seen_companies.insert(policy.company_id.as_str()) {
                out.memberships.push(CompanyMembership {
                    membership_id: new_id(ids),
                    user_id: person.user_id.clone(),
                    company_id: policy.company_id.clone(),
                    policy_id: policy.policy_id.clone(),
                });
            }
        }

        // Bookings, and reviews for some completed ones.
        let bookings = if agents.is_empty() {
            0
        } else {
            rng.between(cfg.appointments_per_person.min, cfg.appointments_per_person.max)
        };
        for _ in 0..bookings {
            let agent = rng.pick(agents);
            let policy = rng.pick(&pools.policies);
            let status = *rng.pick(&AppointmentStatus::ALL);
            let days_back = rng.next_u64_below(u64::from(cfg.appointment_window_days)) as i64;
            let hour = rng.between(cfg.appointment_hours.min, cfg.appointment_hours.max);
            let start_time =
                midnight - Duration::days(days_back) + Duration::hours(i64::from(hour));
            let appointment_id = new_id(ids);

            if status == AppointmentStatus::Completed && rng.chance(cfg.review_probability) {
                out.reviews.push(Review {
                    review_id: new_id(ids),
                    appointment_id: appointment_id.clone(),
                    user_id: person.user_id.clone(),
                    agent_id: agent.agent_id.clone(),
                    rating: rng.between(cfg.review_rating.min, cfg.review_rating.max),
                    comment: rng.pick(vocabulary::REVIEW_COMMENTS).to_string(),
                });
            }

            out.appointments.push(Appointment {
                appointment_id,
                user_id: person.user_id.clone(),
                agent_id: agent.agent_id.clone(),
                policy_id: policy.policy_id.clone(),
                status,
                start_time,
                end_time: start_time
                    + Duration::minutes(i64::from(cfg.appointment_duration_minutes)),
            });
        }

        // Claim against one of this person's own policies; rejections may escalate.
        if rng.chance(cfg.claim_probability) {
            let claim_id = new_id(ids);
            let status = *rng.pick(&ClaimStatus::ALL);
            let back = rng.next_u64_below(u64::from(cfg.claim_window_days) * SECONDS_PER_DAY);
            let filed_at = now - Duration::seconds(back as i64);
            // Truncate to cents, kept inside [min, max).
            let amount = ((rng.range_f64(cfg.claim_amount.min, cfg.claim_amount.max) * 100.0)
                .floor()
                / 100.0)
                .min(cfg.claim_amount.max - 0.01)
                .max(cfg.claim_amount.min);
            let fraud_score = ((rng.range_f64(0.0, cfg.fraud_score_max) * 10.0).floor() / 10.0)
                .min(cfg.fraud_score_max - 0.1)
                .max(0.0);

            if status == ClaimStatus::Rejected && rng.chance(cfg.dispute_probability) {
                out.disputes.push(DisputeCase {
                    case_id: new_id(ids),
                    claim_id: claim_id.clone(),
                    user_id: person.user_id.clone(),
                    case_type: rng.pick(vocabulary::DISPUTE_CASE_TYPES).to_string(),
                    priority: *rng.pick(&Priority::ALL),
                    status: vocabulary::DISPUTE_OPEN_STATUS.to_string(),
                    opened_at: filed_at,
                });
            }

            out.claims.push(Claim {
                claim_id,
                user_id: person.user_id.clone(),
                policy_id: rng.pick(&held_policies).to_string(),
                amount,
                status,
                fraud_score,
                description: rng.pick(vocabulary::CLAIM_DESCRIPTIONS).to_string(),
                filed_at,
            });
        }

        if rng.chance(cfg.feedback_probability) {
            let status = *rng.pick(&FeedbackStatus::ALL);
            out.feedback.push(Feedback {
                feedback_id: new_id(ids),
                user_id: person.user_id.clone(),
                category: rng.pick(vocabulary::FEEDBACK_CATEGORIES).to_string(),
                message: rng.pick(vocabulary::FEEDBACK_MESSAGES).to_string(),
                admin_response: (status == FeedbackStatus::Resolved)
                    .then(|| cfg.admin_response.clone()),
                status,
            });
        }

        let ahead = rng.next_u64_below(u64::from(cfg.reminder_window_days) * SECONDS_PER_DAY + 1);
        let reminder_type = rng.pick(vocabulary::REMINDER_TYPES);
        out.reminders.push(Reminder {
            reminder_id: new_id(ids),
            user_id: person.user_id.clone(),
            reminder_type: reminder_type.to_string(),
            priority: *rng.pick(&Priority::ALL),
            message: vocabulary::reminder_message(reminder_type).to_string(),
            scheduled_at: now + Duration::seconds(ahead as i64),
        });
    }
}

/// Per-person records accumulated across the history pass.
#[derive(Default)]
struct History {
    holdings: Vec<Holding>,
    memberships: Vec<CompanyMembership>,
    appointments: Vec<Appointment>,
    reviews: Vec<Review>,
    claims: Vec<Claim>,
    disputes: Vec<DisputeCase>,
    feedback: Vec<Feedback>,
    reminders: Vec<Reminder>,
}

impl History {
    fn move_into(self, batch: &mut FixtureBatch) {
        batch.holdings = self.holdings;
        batch.memberships = self.memberships;
        batch.appointments = self.appointments;
        batch.reviews = self.reviews;
        batch.claims = self.claims;
        batch.disputes = self.disputes;
        batch.feedback = self.feedback;
        batch.reminders = self.reminders;
    }
}

fn new_id(ids: &mut FixtureRng) -> EntityId {
    ids.next_uuid().to_string()
}
