//! Data seeding layer for the insurance brokerage platform.
//!
//! Seeding order (fixed):
//!   1. Reference catalog: companies and policies.
//!   2. Volume fixtures: users, agents and their history.
//!
//! RULES:
//!   - All randomness flows through the RngBank.
//!   - All timestamps are relative to one SeedClock reading.
//!   - Each seeding step commits in a single transaction or not at all.

pub mod clock;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fixture_seeder;
pub mod model;
pub mod name_generator;
pub mod reference_seeder;
pub mod rng;
pub mod store;
pub mod types;
pub mod vocabulary;
