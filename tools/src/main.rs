//! seed-runner: headless fixture seeder for the brokerage platform.
//!
//! Usage:
//!   seed-runner --seed 12345 --db brokerage.db
//!   seed-runner --seed 12345 --config seed.json --users 500 --agents 60 --audit
//!   seed-runner --skip-reference --now 1700000000

use anyhow::Result;
use brokerage_core::{
    clock::SeedClock,
    config::GeneratorConfig,
    credentials::Sha256Hasher,
    fixture_seeder::{FixtureGenerator, SeedOutcome},
    reference_seeder::ReferenceCatalogSeeder,
    rng::RngBank,
    store::SeedStore,
};
use std::env;

#[derive(serde::Serialize)]
struct RunReport {
    seed: u64,
    generated_at: String,
    reference: Option<brokerage_core::reference_seeder::ReferenceOutcome>,
    fixtures: SeedOutcome,
    row_counts: Vec<(brokerage_core::store::EntityKind, u64)>,
    audit: Option<brokerage_core::store::IntegrityReport>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let skip_reference = args.iter().any(|a| a == "--skip-reference");
    let run_audit = args.iter().any(|a| a == "--audit");
    let json = args.iter().any(|a| a == "--json");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");

    let mut config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => {
            log::info!("loading generator config from {}", w[1]);
            GeneratorConfig::load(&w[1])?
        }
        None => GeneratorConfig::default(),
    };
    config.user_count = parse_arg(&args, "--users", config.user_count);
    config.agent_count = parse_arg(&args, "--agents", config.agent_count);
    config.validate()?;

    let clock = match args.windows(2).find(|w| w[0] == "--now") {
        Some(w) => SeedClock::from_unix(w[1].parse()?),
        None => SeedClock::system(),
    };

    if !json {
        println!("Brokerage fixtures: seed-runner");
        println!("  seed:      {seed}");
        println!("  db:        {db}");
        println!("  users:     {}", config.user_count);
        println!("  agents:    {}", config.agent_count);
        println!("  now:       {}", clock.now().to_rfc3339());
        println!();
    }

    let mut store = SeedStore::open(db)?;
    store.migrate()?;
    let bank = RngBank::new(seed);

    let reference = if skip_reference {
        None
    } else {
        Some(ReferenceCatalogSeeder::run(&mut store, &bank)?)
    };

    let generator = FixtureGenerator::new(config, Sha256Hasher::default())?;
    let fixtures = generator.run(&mut store, &clock, &bank)?;

    let audit = if run_audit {
        Some(store.audit(generator.config().appointment_duration_minutes)?)
    } else {
        None
    };

    let report = RunReport {
        seed,
        generated_at: clock.now().to_rfc3339(),
        reference,
        fixtures,
        row_counts: store.counts()?,
        audit,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    if let Some(audit) = &report.audit {
        if !audit.is_clean() {
            anyhow::bail!("integrity audit failed: {audit:?}");
        }
    }
    Ok(())
}

fn print_summary(report: &RunReport) {
    println!("=== SEED SUMMARY ===");
    match &report.reference {
        Some(outcome) => println!("  reference:  {outcome:?}"),
        None => println!("  reference:  skipped (--skip-reference)"),
    }
    match &report.fixtures {
        SeedOutcome::Seeded { run_id, summary } => {
            println!("  run_id:     {run_id}");
            println!("  rows:       {}", summary.total());
        }
        SeedOutcome::Skipped(reason) => println!("  fixtures:   skipped ({reason:?})"),
    }

    println!();
    println!("=== TABLE COUNTS ===");
    for (kind, n) in &report.row_counts {
        println!("  {:<20} {n}", kind.table());
    }

    if let Some(audit) = &report.audit {
        println!();
        println!("=== INTEGRITY AUDIT ===");
        if audit.is_clean() {
            println!("  clean");
        } else {
            println!("  {audit:#?}");
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
