//! Deterministic random number generation.
//!
//! RULE: Nothing in the seeding layer may call any platform RNG.
//! All randomness flows through FixtureRng instances derived
//! from the single master seed handed to the generator.
//!
//! Each generation stage gets its own RNG stream, seeded deterministically
//! from (master_seed XOR stream_index). This means:
//!   - Adding a new stage never changes existing stages' streams.
//!   - Each stage's stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use uuid::Uuid;

/// A named, deterministic RNG for a single generation stage.
pub struct FixtureRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl FixtureRng {
    /// Create a stage RNG from the master seed and a stable
    /// stream index. The index must never change once assigned.
    pub fn new(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll an integer in [lo, hi], both ends inclusive.
    pub fn between(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "inverted range {lo}..={hi}");
        lo + self.next_u64_below(u64::from(hi - lo) + 1) as u32
    }

    /// Roll a float in [lo, hi).
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniformly pick one element. Panics on an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.next_u64_below(items.len() as u64) as usize;
        &items[index]
    }

    /// A v4 UUID built from this stream, so identifiers replay with the seed.
    pub fn next_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.next_u64().to_le_bytes());
        bytes[8..].copy_from_slice(&self.next_u64().to_le_bytes());
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

/// All stage RNGs for a single seeding run, indexed by stable slot.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_stream(&self, slot: StreamSlot) -> FixtureRng {
        FixtureRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }

    /// A stream for `slot` further keyed by `salt` (e.g. the generation
    /// timestamp), so two runs on one database never mint the same ids.
    pub fn for_stream_at(&self, slot: StreamSlot, salt: u64) -> FixtureRng {
        FixtureRng::new(self.master_seed ^ salt.rotate_left(17), slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stage's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Reference = 0,
    People = 1,
    Agents = 2,
    Activity = 3,
    Identity = 4,
    // Add new stages here, append only.
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::People => "people",
            Self::Agents => "agents",
            Self::Activity => "activity",
            Self::Identity => "identity",
        }
    }
}
