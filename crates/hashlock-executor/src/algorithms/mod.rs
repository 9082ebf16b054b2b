//! # Algorithms Module
//!
//! Digest and key derivation helpers.

pub mod keys;
pub mod secret;

pub use keys::{hashlock_key, hashlock_prefix, query_cache_key, HASHLOCK_KEY_SUFFIX};
pub use secret::{create_hash_lock, generate_random_secret, verify_secret, SECRET_LEN};
