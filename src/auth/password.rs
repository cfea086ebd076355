//! Password Hashing
//! Mission: One-way credential storage with a tunable work factor

use anyhow::{Context, Result};

/// bcrypt hasher with an explicit cost.
///
/// The cost comes from configuration (default 12) so operators can trade
/// CPU for brute-force resistance without a rebuild.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password. The output embeds the cost and salt.
    pub fn hash(&self, plaintext: &str) -> Result<String> {
        bcrypt::hash(plaintext, self.cost).context("Failed to hash password")
    }

    /// Check a plaintext against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; only a malformed hash is an error.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(plaintext, hash).context("Failed to verify password")
    }
}
