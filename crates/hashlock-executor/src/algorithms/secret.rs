//! # Secret Generation and Verification
//!
//! SHA-256 is the only digest a commitment may use.

use crate::domain::{Hash, SecureSecret};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Length of secrets produced by [`generate_random_secret`].
pub const SECRET_LEN: usize = 32;

/// Generate a cryptographically secure random secret.
pub fn generate_random_secret() -> SecureSecret {
    let mut secret = vec![0u8; SECRET_LEN];
    rand::thread_rng().fill_bytes(&mut secret);
    SecureSecret::new(secret)
}

/// Create a commitment from a secret using SHA-256.
pub fn create_hash_lock(secret: &[u8]) -> Hash {
    Sha256::digest(secret).into()
}

/// Verify that a secret matches a commitment.
pub fn verify_secret(secret: &[u8], hash_lock: &Hash) -> bool {
    create_hash_lock(secret) == *hash_lock
}
