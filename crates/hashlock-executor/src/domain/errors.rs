//! # Domain Errors
//!
//! Error types for the hashlock executor.

use super::value_objects::HashlockStatus;
use crate::ports::outbound::{KVStoreError, LedgerError};
use thiserror::Error;

/// Hash type (32-byte SHA-256).
pub type Hash = [u8; 32];

/// Address type (20-byte).
pub type Address = [u8; 20];

/// Hashlock error types.
///
/// Every variant aborts the current action; nothing is persisted and the
/// ledger is left untouched.
#[derive(Debug, Error)]
pub enum HashlockError {
    /// A record already exists for this commitment.
    #[error("Duplicate hashlock: {}", hex::encode(.0))]
    DuplicateLock(Hash),

    /// No record (or cache entry) exists for this id.
    #[error("Hashlock not found: {}", hex::encode(.0))]
    NotFound(Hash),

    /// The record is not in the status the action requires.
    #[error("Invalid hashlock status: {current:?} -> {attempted:?}")]
    InvalidStatus {
        /// Current status
        current: HashlockStatus,
        /// Status the action tried to reach
        attempted: HashlockStatus,
    },

    /// Caller is not the return address of the record.
    #[error("Caller is not the hashlock return address")]
    WrongReturnAddress,

    /// Caller is not the designated recipient of the record.
    #[error("Caller is not the hashlock send address")]
    WrongSendAddress,

    /// Unlock attempted before the claim window elapsed.
    #[error("Claim window not elapsed: {elapsed}s of {frozen_time}s")]
    WindowNotElapsed {
        /// Seconds since creation (0 if the block time precedes creation)
        elapsed: u64,
        /// Length of the claim window
        frozen_time: u64,
    },

    /// Send attempted after the claim window closed.
    #[error("Claim window exceeded: {elapsed}s of {frozen_time}s")]
    WindowExceeded {
        /// Seconds since creation
        elapsed: u64,
        /// Length of the claim window
        frozen_time: u64,
    },

    /// Ledger adapter failure, propagated verbatim.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Stored bytes could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Stored value could not be encoded.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Key-value adapter failure.
    #[error(transparent)]
    Storage(#[from] KVStoreError),
}

impl HashlockError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateLock(_) => "duplicate_lock",
            Self::NotFound(_) => "not_found",
            Self::InvalidStatus { .. } => "invalid_status",
            Self::WrongReturnAddress => "wrong_return_address",
            Self::WrongSendAddress => "wrong_send_address",
            Self::WindowNotElapsed { .. } => "window_not_elapsed",
            Self::WindowExceeded { .. } => "window_exceeded",
            Self::Ledger(_) => "ledger_failure",
            Self::Decode(_) => "decode_failure",
            Self::Encode(_) => "encode_failure",
            Self::Storage(_) => "storage_failure",
        }
    }
}
