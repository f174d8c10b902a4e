use super::SeedStore;
use crate::{
    error::SeedResult,
    model::{Company, Policy, PolicyType, ReferencePools},
};
use rusqlite::params;

impl SeedStore {
    // ── Reference catalog ─────────────────────────────────────────

    pub fn companies(&self) -> SeedResult<Vec<Company>> {
        let mut stmt = self.conn.prepare(
            "SELECT company_id, name, claim_settlement_ratio
             FROM company ORDER BY company_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Company {
                company_id: row.get(0)?,
                name: row.get(1)?,
                claim_settlement_ratio: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// All policies, ordered by id so pool draws are reproducible.
    /// Rows with an unknown policy type are skipped with a warning.
    pub fn policies(&self) -> SeedResult<Vec<Policy>> {
        let mut stmt = self.conn.prepare(
            "SELECT policy_id, company_id, name, policy_type, premium, coverage, term_years
             FROM policy ORDER BY policy_id ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, f64>(4)?,
                    row.get::<_, f64>(5)?,
                    row.get::<_, i64>(6)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut policies = Vec::with_capacity(rows.len());
        for (policy_id, company_id, name, policy_type, premium, coverage, term_years) in rows {
            let Some(policy_type) = PolicyType::parse(&policy_type) else {
                log::warn!("policy {policy_id}: unknown policy type {policy_type}, skipped");
                continue;
            };
            policies.push(Policy {
                policy_id,
                company_id,
                name,
                policy_type,
                premium,
                coverage,
                term_years: term_years as u32,
            });
        }
        Ok(policies)
    }

    pub fn reference_pools(&self) -> SeedResult<ReferencePools> {
        Ok(ReferencePools {
            companies: self.companies()?,
            policies: self.policies()?,
        })
    }

    /// Write companies and their policies as one unit of work.
    pub fn persist_reference(&mut self, pools: &ReferencePools) -> SeedResult<()> {
        let tx = self.conn.transaction()?;
        {
            let mut company_stmt = tx.prepare(
                "INSERT INTO company (company_id, name, claim_settlement_ratio)
                 VALUES (?1, ?2, ?3)",
            )?;
            for c in &pools.companies {
                company_stmt.execute(params![&c.company_id, &c.name, c.claim_settlement_ratio])?;
            }

            let mut policy_stmt = tx.prepare(
                "INSERT INTO policy (
                    policy_id, company_id, name, policy_type, premium, coverage, term_years
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for p in &pools.policies {
                policy_stmt.execute(params![
                    &p.policy_id,
                    &p.company_id,
                    &p.name,
                    p.policy_type.as_str(),
                    p.premium,
                    p.coverage,
                    p.term_years as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
