//! Deterministic name generation using curated name lists.
//!
//! Provides people names, login emails and insurer names for the
//! seeders. All generation is deterministic (same RNG seed = same names).

use crate::rng::FixtureRng;

/// Deterministic name generator using curated name lists
pub struct NameGenerator;

impl NameGenerator {
    /// Generate a (first, last) pair deterministically
    pub fn generate_name_parts(rng: &mut FixtureRng) -> (&'static str, &'static str) {
        let first = Self::generate_first_name(rng);
        let last = Self::generate_last_name(rng);
        (first, last)
    }

    pub fn generate_first_name(rng: &mut FixtureRng) -> &'static str {
        *rng.pick(Self::first_names())
    }

    pub fn generate_last_name(rng: &mut FixtureRng) -> &'static str {
        *rng.pick(Self::last_names())
    }

    /// Login email. `tag` disambiguates people who share a name.
    pub fn email_for(first: &str, last: &str, tag: &str, domain: &str) -> String {
        format!(
            "{}.{}.{}@{}",
            first.to_ascii_lowercase(),
            last.to_ascii_lowercase(),
            tag,
            domain
        )
    }

    /// Insurer names used by the reference catalog, in catalog order.
    pub fn insurer_names() -> &'static [&'static str] {
        &[
            "Aditya Shield Insurance",
            "Bharat Suraksha General",
            "Coastal Assurance Co",
            "Deccan Life & Health",
            "Everest Mutual",
            "Ganga Secure Insurance",
            "Horizon Care Assurance",
            "Indus Protect Ltd",
        ]
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Aarav", "Vivaan", "Aditya", "Vihaan", "Arjun", "Sai", "Reyansh", "Ayaan",
            "Krishna", "Ishaan", "Rohan", "Karan", "Rahul", "Vikram", "Sanjay", "Amit",
            "Rajesh", "Suresh", "Nikhil", "Manish", "Pranav", "Siddharth", "Kabir", "Dev",
            "Ananya", "Diya", "Aadhya", "Saanvi", "Myra", "Priya", "Pooja", "Neha",
            "Kavya", "Isha", "Riya", "Sneha", "Meera", "Anjali", "Lakshmi", "Divya",
            "Shreya", "Nandini", "Tara", "Aisha", "Fatima", "Zoya", "Simran", "Harleen",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Sharma", "Verma", "Gupta", "Patel", "Singh", "Kumar", "Reddy", "Rao",
            "Nair", "Menon", "Iyer", "Pillai", "Das", "Bose", "Chatterjee", "Mukherjee",
            "Joshi", "Kulkarni", "Deshpande", "Patil", "Shah", "Mehta", "Desai", "Jain",
            "Agarwal", "Banerjee", "Kapoor", "Malhotra", "Khan", "Qureshi", "Fernandes", "D'Souza",
        ]
    }
}
