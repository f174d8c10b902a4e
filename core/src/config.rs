use crate::error::{SeedError, SeedResult};
use serde::{Deserialize, Serialize};

/// Inclusive integer range, e.g. "1 to 3 holdings per person".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Half-open float range `[min, max)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl AmountRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Tuning knobs for the volume fixture generator.
///
/// Every field has a default, so a JSON file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Generation runs only while the person count is below this.
    pub person_threshold: u64,
    pub user_count: usize,
    pub agent_count: usize,

    pub holdings_per_person: CountRange,
    pub appointments_per_person: CountRange,

    pub purchase_window_days: u32,
    pub appointment_window_days: u32,
    pub claim_window_days: u32,
    pub reminder_window_days: u32,

    pub appointment_duration_minutes: u32,
    /// Hours of the day (UTC) an appointment may start at, inclusive.
    pub appointment_hours: CountRange,

    pub income: AmountRange,
    pub dependents: CountRange,
    pub age: CountRange,
    pub agent_rating: AmountRange,
    pub agent_experience_years: CountRange,

    pub claim_amount: AmountRange,
    pub fraud_score_max: f64,
    pub review_rating: CountRange,

    pub claim_probability: f64,
    pub dispute_probability: f64,
    pub review_probability: f64,
    pub feedback_probability: f64,

    pub default_password: String,
    pub admin_response: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            person_threshold: 200,
            user_count: 250,
            agent_count: 40,
            holdings_per_person: CountRange::new(1, 3),
            appointments_per_person: CountRange::new(0, 3),
            purchase_window_days: 500,
            appointment_window_days: 30,
            claim_window_days: 365,
            reminder_window_days: 15,
            appointment_duration_minutes: 60,
            appointment_hours: CountRange::new(9, 17),
            income: AmountRange::new(300_000.0, 2_500_000.0),
            dependents: CountRange::new(0, 4),
            age: CountRange::new(21, 65),
            agent_rating: AmountRange::new(3.5, 5.0),
            agent_experience_years: CountRange::new(1, 25),
            claim_amount: AmountRange::new(5_000.0, 100_000.0),
            fraud_score_max: 100.0,
            review_rating: CountRange::new(3, 5),
            claim_probability: 0.4,
            dispute_probability: 0.5,
            review_probability: 0.5,
            feedback_probability: 0.2,
            default_password: "password123".into(),
            admin_response: "Thank you for your feedback. Our team has addressed this issue."
                .into(),
        }
    }
}

impl GeneratorConfig {
    /// Load overrides from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &str) -> SeedResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Small volumes for tests. Same probabilities as production.
    pub fn default_test() -> Self {
        Self {
            person_threshold: 50,
            user_count: 40,
            agent_count: 6,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SeedResult<()> {
        let probabilities = [
            ("claim_probability", self.claim_probability),
            ("dispute_probability", self.dispute_probability),
            ("review_probability", self.review_probability),
            ("feedback_probability", self.feedback_probability),
        ];
        for (field, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(field, format!("probability {p} outside [0, 1]")));
            }
        }

        let counts = [
            ("holdings_per_person", self.holdings_per_person),
            ("appointments_per_person", self.appointments_per_person),
            ("appointment_hours", self.appointment_hours),
            ("dependents", self.dependents),
            ("age", self.age),
            ("agent_experience_years", self.agent_experience_years),
            ("review_rating", self.review_rating),
        ];
        for (field, r) in counts {
            if r.min > r.max {
                return Err(invalid(field, format!("min {} > max {}", r.min, r.max)));
            }
        }
        if self.holdings_per_person.min == 0 {
            return Err(invalid("holdings_per_person", "every person needs a holding".into()));
        }
        if self.appointment_hours.max > 23 {
            return Err(invalid("appointment_hours", "hour of day must be <= 23".into()));
        }

        let amounts = [
            ("income", self.income),
            ("agent_rating", self.agent_rating),
            ("claim_amount", self.claim_amount),
        ];
        for (field, r) in amounts {
            if !r.min.is_finite() || !r.max.is_finite() || r.min >= r.max || r.min < 0.0 {
                return Err(invalid(field, format!("bad range [{}, {})", r.min, r.max)));
            }
        }
        // Claim amounts are whole cents and fraud scores one decimal place.
        if self.claim_amount.max - self.claim_amount.min < 0.01 {
            return Err(invalid("claim_amount", "range must span at least one cent".into()));
        }
        if !(self.fraud_score_max >= 0.1 && self.fraud_score_max.is_finite()) {
            return Err(invalid("fraud_score_max", "must be at least 0.1".into()));
        }

        if self.appointment_duration_minutes == 0 {
            return Err(invalid("appointment_duration_minutes", "must be non-zero".into()));
        }
        let windows = [
            ("purchase_window_days", self.purchase_window_days),
            ("appointment_window_days", self.appointment_window_days),
            ("claim_window_days", self.claim_window_days),
            ("reminder_window_days", self.reminder_window_days),
        ];
        for (field, days) in windows {
            if days == 0 {
                return Err(invalid(field, "window must be at least one day".into()));
            }
        }

        if self.admin_response.trim().is_empty() {
            return Err(invalid("admin_response", "must not be blank".into()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> SeedError {
    SeedError::InvalidConfig { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GeneratorConfig::default().validate().unwrap();
        GeneratorConfig::default_test().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: GeneratorConfig =
            serde_json::from_str(r#"{ "user_count": 5, "claim_probability": 0.9 }"#).unwrap();
        assert_eq!(cfg.user_count, 5);
        assert_eq!(cfg.claim_probability, 0.9);
        assert_eq!(cfg.feedback_probability, 0.2);
        assert_eq!(cfg.holdings_per_person, CountRange::new(1, 3));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let cfg = GeneratorConfig {
            feedback_probability: 1.5,
            ..GeneratorConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(
            err,
            SeedError::InvalidConfig { field: "feedback_probability", .. }
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        let cfg = GeneratorConfig {
            appointments_per_person: CountRange::new(4, 1),
            ..GeneratorConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_fraud_ceiling_below_one_step() {
        let cfg = GeneratorConfig {
            fraud_score_max: 0.05,
            ..GeneratorConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, SeedError::InvalidConfig { field: "fraud_score_max", .. }));

        let cfg = GeneratorConfig {
            fraud_score_max: 0.1,
            ..GeneratorConfig::default()
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_claim_range_narrower_than_a_cent() {
        let cfg = GeneratorConfig {
            claim_amount: AmountRange::new(5_000.0, 5_000.005),
            ..GeneratorConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, SeedError::InvalidConfig { field: "claim_amount", .. }));
    }

    #[test]
    fn load_reports_missing_file_and_bad_values() {
        let err = GeneratorConfig::load("/nonexistent/fixtures.json").unwrap_err();
        assert!(matches!(err, SeedError::Other(_)));

        let path = std::env::temp_dir().join(format!("fixtures-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "review_probability": 2.0 }"#).unwrap();
        let err = GeneratorConfig::load(path.to_str().unwrap()).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, SeedError::InvalidConfig { field: "review_probability", .. }));
    }

    #[test]
    fn rejects_zero_duration() {
        let cfg = GeneratorConfig {
            appointment_duration_minutes: 0,
            ..GeneratorConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
