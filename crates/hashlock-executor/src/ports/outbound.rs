//! # Outbound Ports
//!
//! Capabilities the host framework provides to the executor: the account
//! ledger and key-value storage.
//!
//! Both are called synchronously from inside one transaction; the host
//! serializes transaction application, so implementations only need
//! interior mutability, not cross-transaction locking.

use crate::domain::{Address, LedgerEffects};
use thiserror::Error;

/// Ledger adapter failures. The executor propagates these verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Not enough spendable balance.
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Amount requested
        required: u64,
        /// Amount spendable
        available: u64,
    },

    /// Not enough frozen balance.
    #[error("Insufficient frozen balance: required {required}, available {available}")]
    InsufficientFrozen {
        /// Amount requested
        required: u64,
        /// Amount frozen
        available: u64,
    },

    /// Amount rejected by the ledger (e.g. zero).
    #[error("Invalid amount: {0}")]
    InvalidAmount(u64),

    /// Balance arithmetic would overflow.
    #[error("Balance overflow")]
    Overflow,

    /// Ledger backend failure.
    #[error("Ledger backend error: {0}")]
    Backend(String),
}

/// Account ledger capability.
///
/// All balances are the owner's sub-account under the contract address
/// `exec_addr`.
pub trait LedgerAdapter: Send + Sync {
    /// Move `amount` from `from`'s balance to its frozen balance.
    fn freeze(
        &self,
        from: &Address,
        exec_addr: &Address,
        amount: u64,
    ) -> Result<LedgerEffects, LedgerError>;

    /// Move `amount` from `owner`'s frozen balance back to its balance.
    fn reactivate(
        &self,
        owner: &Address,
        exec_addr: &Address,
        amount: u64,
    ) -> Result<LedgerEffects, LedgerError>;

    /// Move `amount` from `from`'s frozen balance to `to`'s balance.
    fn transfer_frozen(
        &self,
        from: &Address,
        to: &Address,
        exec_addr: &Address,
        amount: u64,
    ) -> Result<LedgerEffects, LedgerError>;
}

/// Key-value store failures. A missing key is not an error (`Ok(None)`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError {
        /// Backend message
        message: String,
    },

    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError {
        /// Backend message
        message: String,
    },
}

/// Abstract interface for key-value database operations.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key, `None` if absent.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Set a single key-value pair.
    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&self, key: &[u8]) -> Result<(), KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &[u8]) -> Result<(), KVStoreError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        (**self).exists(key)
    }
}

impl<T: LedgerAdapter + ?Sized> LedgerAdapter for std::sync::Arc<T> {
    fn freeze(
        &self,
        from: &Address,
        exec_addr: &Address,
        amount: u64,
    ) -> Result<LedgerEffects, LedgerError> {
        (**self).freeze(from, exec_addr, amount)
    }

    fn reactivate(
        &self,
        owner: &Address,
        exec_addr: &Address,
        amount: u64,
    ) -> Result<LedgerEffects, LedgerError> {
        (**self).reactivate(owner, exec_addr, amount)
    }

    fn transfer_frozen(
        &self,
        from: &Address,
        to: &Address,
        exec_addr: &Address,
        amount: u64,
    ) -> Result<LedgerEffects, LedgerError> {
        (**self).transfer_frozen(from, to, exec_addr, amount)
    }
}
