//! Storage key derivation.

use crate::domain::Hash;

/// Suffix appended to the namespace to form the lock record prefix.
pub const HASHLOCK_KEY_SUFFIX: &str = "-hashlock-";

/// Record key prefix for a namespace, e.g. `mavl` -> `mavl-hashlock-`.
pub fn hashlock_prefix(namespace: &str) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(namespace.len() + HASHLOCK_KEY_SUFFIX.len());
    prefix.extend_from_slice(namespace.as_bytes());
    prefix.extend_from_slice(HASHLOCK_KEY_SUFFIX.as_bytes());
    prefix
}

/// Record key: prefix followed by the raw id bytes.
pub fn hashlock_key(prefix: &[u8], id: &Hash) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + id.len());
    key.extend_from_slice(prefix);
    key.extend_from_slice(id);
    key
}

/// Query cache key: the raw id bytes, no prefix.
pub fn query_cache_key(id: &Hash) -> Vec<u8> {
    id.to_vec()
}
