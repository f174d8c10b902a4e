//! Entity records produced by the seeders and written by the store.
//!
//! Status vocabularies are closed enums. Each exposes `ALL` (the
//! enumeration uniform draws are taken from) and `as_str()` (the value
//! persisted in the database, identical to the serde form).

use crate::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

// ── Reference data ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub company_id: EntityId,
    pub name: String,
    pub claim_settlement_ratio: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyType {
    Health,
    Life,
    Motor,
    Travel,
    Home,
}

impl PolicyType {
    pub const ALL: [Self; 5] = [Self::Health, Self::Life, Self::Motor, Self::Travel, Self::Home];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "HEALTH",
            Self::Life => "LIFE",
            Self::Motor => "MOTOR",
            Self::Travel => "TRAVEL",
            Self::Home => "HOME",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Policy {
    pub policy_id: EntityId,
    pub company_id: EntityId,
    pub name: String,
    pub policy_type: PolicyType,
    pub premium: f64,
    pub coverage: f64,
    pub term_years: u32,
}

/// Existing companies and policies the fixture generator binds to.
#[derive(Debug, Clone, Default)]
pub struct ReferencePools {
    pub companies: Vec<Company>,
    pub policies: Vec<Policy>,
}

impl ReferencePools {
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty() || self.policies.is_empty()
    }
}

// ── People ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub user_id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credential: String,
    pub region: String,
    pub age: u32,
    pub income: f64,
    pub dependents: u32,
    pub health_condition: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    pub agent_id: EntityId,
    pub company_id: EntityId,
    pub name: String,
    pub email: String,
    pub credential: String,
    pub specialization: String,
    pub rating: f64,
    pub experience_years: u32,
    pub is_active: bool,
}

// ── Holdings ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HoldingStatus {
    Active,
    Expired,
}

impl HoldingStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Expired];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    pub holding_id: EntityId,
    pub user_id: EntityId,
    pub policy_id: EntityId,
    pub status: HoldingStatus,
    pub premium: f64,
    pub purchased_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyMembership {
    pub membership_id: EntityId,
    pub user_id: EntityId,
    pub company_id: EntityId,
    pub policy_id: EntityId,
}

// ── Bookings ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Approved,
    Completed,
    Rejected,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Approved,
        Self::Completed,
        Self::Rejected,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Completed => "COMPLETED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub appointment_id: EntityId,
    pub user_id: EntityId,
    pub agent_id: EntityId,
    pub policy_id: EntityId,
    pub status: AppointmentStatus,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub review_id: EntityId,
    pub appointment_id: EntityId,
    pub user_id: EntityId,
    pub agent_id: EntityId,
    pub rating: u32,
    pub comment: String,
}

// ── Claims ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claim {
    pub claim_id: EntityId,
    pub user_id: EntityId,
    pub policy_id: EntityId,
    pub amount: f64,
    pub status: ClaimStatus,
    pub fraud_score: f64,
    pub description: String,
    pub filed_at: Timestamp,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisputeCase {
    pub case_id: EntityId,
    pub claim_id: EntityId,
    pub user_id: EntityId,
    pub case_type: String,
    pub priority: Priority,
    pub status: String,
    pub opened_at: Timestamp,
}

// ── Feedback & reminders ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackStatus {
    Open,
    Resolved,
}

impl FeedbackStatus {
    pub const ALL: [Self; 2] = [Self::Open, Self::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Resolved => "RESOLVED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub feedback_id: EntityId,
    pub user_id: EntityId,
    pub category: String,
    pub status: FeedbackStatus,
    pub message: String,
    /// Present iff `status == Resolved`.
    pub admin_response: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    pub reminder_id: EntityId,
    pub user_id: EntityId,
    pub reminder_type: String,
    pub priority: Priority,
    pub message: String,
    pub scheduled_at: Timestamp,
}
