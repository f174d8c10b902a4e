//! Credential hashing collaborator.
//!
//! The seeders never store plaintext. They hash the configured default
//! password once per run and reuse the opaque result for every
//! synthesized account.

use sha2::{Digest, Sha256};

pub trait CredentialHasher {
    /// Turn a plaintext secret into an opaque stored credential.
    fn hash(&self, plaintext: &str) -> String;
}

/// Salted SHA-256, rendered as `sha256$<salt>$<hex digest>`.
pub struct Sha256Hasher {
    salt: String,
}

impl Sha256Hasher {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new("brokerage-fixtures")
    }
}

impl CredentialHasher for Sha256Hasher {
    fn hash(&self, plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(b"$");
        hasher.update(plaintext.as_bytes());
        let digest = hex::encode(hasher.finalize());
        format!("sha256${}${}", self.salt, digest)
    }
}
