use super::SeedStore;
use crate::error::SeedResult;
use rusqlite::params;
use serde::Serialize;

/// Counts of rows violating the cross-entity invariants. All zero on a
/// healthy database.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct IntegrityReport {
    pub duplicate_memberships: u64,
    pub reviews_on_uncompleted_appointments: u64,
    pub duplicate_reviews: u64,
    pub disputes_on_unrejected_claims: u64,
    pub feedback_response_mismatches: u64,
    pub seeded_persons_without_one_reminder: u64,
    pub appointments_with_bad_duration: u64,
    pub agents_rated_out_of_range: u64,
    pub holdings_purchased_after_generation: u64,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

impl SeedStore {
    /// Read-only integrity audit.
    ///
    /// `duration_minutes` is the appointment length the generator was
    /// configured with. Holding purchase times are checked against the
    /// generation time of the run that created the person.
    pub fn audit(&self, duration_minutes: u32) -> SeedResult<IntegrityReport> {
        Ok(IntegrityReport {
            duplicate_memberships: self.scalar(
                "SELECT COUNT(*) FROM (
                    SELECT user_id, company_id FROM company_membership
                    GROUP BY user_id, company_id HAVING COUNT(*) > 1
                )",
            )?,
            reviews_on_uncompleted_appointments: self.scalar(
                "SELECT COUNT(*) FROM review r
                 JOIN appointment a ON a.appointment_id = r.appointment_id
                 WHERE a.status <> 'COMPLETED'",
            )?,
            duplicate_reviews: self.scalar(
                "SELECT COUNT(*) FROM (
                    SELECT appointment_id FROM review
                    GROUP BY appointment_id HAVING COUNT(*) > 1
                )",
            )?,
            disputes_on_unrejected_claims: self.scalar(
                "SELECT COUNT(*) FROM dispute_case d
                 JOIN claim c ON c.claim_id = d.claim_id
                 WHERE c.status <> 'REJECTED' OR c.user_id <> d.user_id",
            )?,
            feedback_response_mismatches: self.scalar(
                "SELECT COUNT(*) FROM feedback
                 WHERE (status = 'RESOLVED' AND (admin_response IS NULL OR admin_response = ''))
                    OR (status = 'OPEN' AND admin_response IS NOT NULL)",
            )?,
            seeded_persons_without_one_reminder: self.scalar(
                "SELECT COUNT(*) FROM person p
                 WHERE p.run_id IS NOT NULL
                   AND (SELECT COUNT(*) FROM reminder r WHERE r.user_id = p.user_id) <> 1",
            )?,
            appointments_with_bad_duration: {
                let n: i64 = self.conn.query_row(
                    "SELECT COUNT(*) FROM appointment
                     WHERE strftime('%s', end_time) - strftime('%s', start_time) <> ?1",
                    params![i64::from(duration_minutes) * 60],
                    |row| row.get(0),
                )?;
                n as u64
            },
            agents_rated_out_of_range: self.scalar(
                "SELECT COUNT(*) FROM agent WHERE rating < 3.5 OR rating > 5.0",
            )?,
            holdings_purchased_after_generation: self.scalar(
                "SELECT COUNT(*) FROM holding h
                 JOIN person p ON p.user_id = h.user_id
                 JOIN seed_run s ON s.run_id = p.run_id
                 WHERE h.purchased_at > s.generated_at",
            )?,
        })
    }

    fn scalar(&self, sql: &str) -> SeedResult<u64> {
        let n: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(n as u64)
    }
}
