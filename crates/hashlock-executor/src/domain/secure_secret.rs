//! # Secure Secret Type
//!
//! Wrapper for hashlock preimages that zeroizes memory on drop.
//!
//! A secret is revealed on-chain by the send or unlock transaction, but the
//! executor still should not leave copies lying around in freed memory or
//! print them in logs before the transaction is committed.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A hashlock preimage of arbitrary length that zeroizes on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureSecret {
    inner: Vec<u8>,
}

impl SecureSecret {
    /// Create a new secure secret, taking ownership of the bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { inner: bytes }
    }

    /// Create from a slice (copies).
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            inner: slice.to_vec(),
        }
    }

    /// Get the secret bytes.
    ///
    /// Avoid keeping references to the returned slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True for the empty preimage.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<Vec<u8>> for SecureSecret {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for SecureSecret {
    fn from(slice: &[u8]) -> Self {
        Self::from_slice(slice)
    }
}

impl std::fmt::Debug for SecureSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the actual secret
        f.write_str("SecureSecret(***)")
    }
}

// Hex on the wire, raw bytes never
impl Serialize for SecureSecret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&hex::encode(&self.inner))
    }
}

impl<'de> Deserialize<'de> for SecureSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        Ok(Self::new(bytes))
    }
}
