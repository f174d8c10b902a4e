use super::{fmt_ts, insert_run, SeedRun, SeedStore};
use crate::{error::SeedResult, fixture_seeder::FixtureBatch};
use rusqlite::{params, Transaction};

impl SeedStore {
    // ── Fixture batch ─────────────────────────────────────────────

    /// Bulk-write a generated batch and its run record.
    ///
    /// Parents are written before children so foreign keys resolve row by
    /// row. Any failure drops the transaction uncommitted, which rolls
    /// back every row staged so far.
    pub fn persist_batch(&mut self, run: &SeedRun, batch: &FixtureBatch) -> SeedResult<()> {
        let tx = self.conn.transaction()?;
        write_people(&tx, &run.run_id, batch)?;
        write_holdings(&tx, batch)?;
        write_bookings(&tx, batch)?;
        write_claims(&tx, batch)?;
        write_follow_ups(&tx, batch)?;
        insert_run(&tx, run)?;
        tx.commit()?;
        Ok(())
    }
}

fn write_people(tx: &Transaction<'_>, run_id: &str, batch: &FixtureBatch) -> SeedResult<()> {
    let mut person_stmt = tx.prepare(
        "INSERT INTO person (
            user_id, run_id, first_name, last_name, email, credential, region, age,
            income, dependents, health_condition, is_active, is_verified, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
    )?;
    for p in &batch.persons {
        person_stmt.execute(params![
            &p.user_id,
            run_id,
            &p.first_name,
            &p.last_name,
            &p.email,
            &p.credential,
            &p.region,
            p.age as i64,
            p.income,
            p.dependents as i64,
            &p.health_condition,
            p.is_active,
            p.is_verified,
            fmt_ts(&p.created_at),
        ])?;
    }

    let mut agent_stmt = tx.prepare(
        "INSERT INTO agent (
            agent_id, run_id, company_id, name, email, credential, specialization,
            rating, experience_years, is_active
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )?;
    for a in &batch.agents {
        agent_stmt.execute(params![
            &a.agent_id,
            run_id,
            &a.company_id,
            &a.name,
            &a.email,
            &a.credential,
            &a.specialization,
            a.rating,
            a.experience_years as i64,
            a.is_active,
        ])?;
    }
    Ok(())
}

fn write_holdings(tx: &Transaction<'_>, batch: &FixtureBatch) -> SeedResult<()> {
    let mut holding_stmt = tx.prepare(
        "INSERT INTO holding (holding_id, user_id, policy_id, status, premium, purchased_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for h in &batch.holdings {
        holding_stmt.execute(params![
            &h.holding_id,
            &h.user_id,
            &h.policy_id,
            h.status.as_str(),
            h.premium,
            fmt_ts(&h.purchased_at),
        ])?;
    }

    let mut membership_stmt = tx.prepare(
        "INSERT INTO company_membership (membership_id, user_id, company_id, policy_id)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for m in &batch.memberships {
        membership_stmt.execute(params![
            &m.membership_id,
            &m.user_id,
            &m.company_id,
            &m.policy_id,
        ])?;
    }
    Ok(())
}

fn write_bookings(tx: &Transaction<'_>, batch: &FixtureBatch) -> SeedResult<()> {
    let mut appointment_stmt = tx.prepare(
        "INSERT INTO appointment (
            appointment_id, user_id, agent_id, policy_id, status, start_time, end_time
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for a in &batch.appointments {
        appointment_stmt.execute(params![
            &a.appointment_id,
            &a.user_id,
            &a.agent_id,
            &a.policy_id,
            a.status.as_str(),
            fmt_ts(&a.start_time),
            fmt_ts(&a.end_time),
        ])?;
    }

    let mut review_stmt = tx.prepare(
        "INSERT INTO review (review_id, appointment_id, user_id, agent_id, rating, comment)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for r in &batch.reviews {
        review_stmt.execute(params![
            &r.review_id,
            &r.appointment_id,
            &r.user_id,
            &r.agent_id,
            r.rating as i64,
            &r.comment,
        ])?;
    }
    Ok(())
}

fn write_claims(tx: &Transaction<'_>, batch: &FixtureBatch) -> SeedResult<()> {
    let mut claim_stmt = tx.prepare(
        "INSERT INTO claim (
            claim_id, user_id, policy_id, amount, status, fraud_score, description, filed_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    for c in &batch.claims {
        claim_stmt.execute(params![
            &c.claim_id,
            &c.user_id,
            &c.policy_id,
            c.amount,
            c.status.as_str(),
            c.fraud_score,
            &c.description,
            fmt_ts(&c.filed_at),
        ])?;
    }

    let mut dispute_stmt = tx.prepare(
        "INSERT INTO dispute_case (
            case_id, claim_id, user_id, case_type, priority, status, opened_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for d in &batch.disputes {
        dispute_stmt.execute(params![
            &d.case_id,
            &d.claim_id,
            &d.user_id,
            &d.case_type,
            d.priority.as_str(),
            &d.status,
            fmt_ts(&d.opened_at),
        ])?;
    }
    Ok(())
}

fn write_follow_ups(tx: &Transaction<'_>, batch: &FixtureBatch) -> SeedResult<()> {
    let mut feedback_stmt = tx.prepare(
        "INSERT INTO feedback (feedback_id, user_id, category, status, message, admin_response)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for f in &batch.feedback {
        feedback_stmt.execute(params![
            &f.feedback_id,
            &f.user_id,
            &f.category,
            f.status.as_str(),
            &f.message,
            f.admin_response.as_deref(),
        ])?;
    }

    let mut reminder_stmt = tx.prepare(
        "INSERT INTO reminder (
            reminder_id, user_id, reminder_type, priority, message, scheduled_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for r in &batch.reminders {
        reminder_stmt.execute(params![
            &r.reminder_id,
            &r.user_id,
            &r.reminder_type,
            r.priority.as_str(),
            &r.message,
            fmt_ts(&r.scheduled_at),
        ])?;
    }
    Ok(())
}
