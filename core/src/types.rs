//! Shared primitive types used across the seeding layer.

use chrono::{DateTime, Utc};

/// A stable, unique identifier for any persisted entity.
pub type EntityId = String;

/// The canonical seed-run identifier.
pub type RunId = String;

/// Wall-clock instant. All fixture timestamps are UTC.
pub type Timestamp = DateTime<Utc>;
