//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! Seeders call store methods; they never execute SQL directly.
//!
//! Every write path that touches more than one table runs inside a
//! single transaction: either the whole batch commits or none of it does.

use crate::{
    error::{SeedError, SeedResult},
    types::{RunId, Timestamp},
};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

mod audit;
mod fixtures;
mod reference;

pub use audit::IntegrityReport;

pub struct SeedStore {
    conn: Connection,
}

impl SeedStore {
    pub fn open(path: &str) -> SeedResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SeedResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order. Safe to call repeatedly.
    pub fn migrate(&self) -> SeedResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_schema.sql"))?;
        Ok(())
    }

    // ── Counts ─────────────────────────────────────────────────

    pub fn count(&self, kind: EntityKind) -> SeedResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        let n: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(n as u64)
    }

    /// Row count of every table, in `EntityKind::ALL` order.
    pub fn counts(&self) -> SeedResult<Vec<(EntityKind, u64)>> {
        EntityKind::ALL
            .iter()
            .map(|kind| Ok((*kind, self.count(*kind)?)))
            .collect()
    }

    // ── Seed runs ──────────────────────────────────────────────

    pub fn seed_runs(&self) -> SeedResult<Vec<SeedRun>> {
        let mut stmt = self.conn.prepare(
            "SELECT run_id, seed, version, generated_at, summary
             FROM seed_run ORDER BY generated_at ASC, run_id ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(run_id, seed, version, generated_at, summary)| {
                Ok(SeedRun {
                    run_id,
                    seed: seed as u64,
                    version,
                    generated_at: parse_ts(&generated_at)?,
                    summary,
                })
            })
            .collect()
    }
}

/// One committed fixture batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedRun {
    pub run_id: RunId,
    pub seed: u64,
    pub version: String,
    pub generated_at: Timestamp,
    /// JSON-serialized `BatchSummary`.
    pub summary: String,
}

/// Every persisted table, for counting and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Company,
    Policy,
    Person,
    Agent,
    Holding,
    CompanyMembership,
    Appointment,
    Review,
    Claim,
    DisputeCase,
    Feedback,
    Reminder,
    SeedRun,
}

impl EntityKind {
    pub const ALL: [Self; 13] = [
        Self::Company,
        Self::Policy,
        Self::Person,
        Self::Agent,
        Self::Holding,
        Self::CompanyMembership,
        Self::Appointment,
        Self::Review,
        Self::Claim,
        Self::DisputeCase,
        Self::Feedback,
        Self::Reminder,
        Self::SeedRun,
    ];

    pub fn table(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Policy => "policy",
            Self::Person => "person",
            Self::Agent => "agent",
            Self::Holding => "holding",
            Self::CompanyMembership => "company_membership",
            Self::Appointment => "appointment",
            Self::Review => "review",
            Self::Claim => "claim",
            Self::DisputeCase => "dispute_case",
            Self::Feedback => "feedback",
            Self::Reminder => "reminder",
            Self::SeedRun => "seed_run",
        }
    }
}

// Timestamps are stored as second-precision RFC 3339 in UTC ("...Z"), which
// both sorts lexically and is understood by SQLite's date functions.
pub(crate) fn fmt_ts(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn parse_ts(value: &str) -> SeedResult<Timestamp> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| SeedError::Timestamp {
            value: value.to_string(),
        })
}

fn insert_run(conn: &Connection, run: &SeedRun) -> SeedResult<()> {
    conn.execute(
        "INSERT INTO seed_run (run_id, seed, version, generated_at, summary)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            &run.run_id,
            run.seed as i64,
            &run.version,
            fmt_ts(&run.generated_at),
            &run.summary,
        ],
    )?;
    Ok(())
}
