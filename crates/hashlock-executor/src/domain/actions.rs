//! # Actions and Execution Context
//!
//! Decoded transaction payloads and the context the host framework supplies
//! with each of them.

use super::errors::{Address, Hash};
use super::secure_secret::SecureSecret;
use serde::{Deserialize, Serialize};
use tracing::Span;

/// Lock funds under a commitment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashlockLock {
    /// SHA-256 of the secret.
    pub hash: Hash,
    /// Recipient allowed to send.
    pub to_address: Address,
    /// Amount to freeze.
    pub amount: u64,
    /// Claim window in seconds.
    pub frozen_time: u64,
}

/// Reclaim funds after the window (locker only).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashlockUnlock {
    /// Preimage of the commitment.
    pub secret: SecureSecret,
}

/// Claim funds inside the window (recipient only).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashlockSend {
    /// Preimage of the commitment.
    pub secret: SecureSecret,
}

/// Any hashlock action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashlockAction {
    /// Create a lock.
    Lock(HashlockLock),
    /// Reclaim after expiry.
    Unlock(HashlockUnlock),
    /// Claim before expiry.
    Send(HashlockSend),
}

/// Per-transaction execution context.
///
/// `span` is the structured logger for the transaction: the executor enters
/// it for the duration of the action so every event carries the
/// transaction's fields.
#[derive(Clone, Debug)]
pub struct ExecContext {
    /// Signer of the transaction.
    pub caller: Address,
    /// Block time; the only clock the executor reads.
    pub block_time: u64,
    /// Block height.
    pub height: u64,
    /// Transaction hash.
    pub tx_hash: Hash,
    /// Address of the hashlock contract (custody of frozen funds).
    pub exec_addr: Address,
    span: Span,
}

impl ExecContext {
    /// Create a context with a fresh `hashlock_tx` span.
    pub fn new(
        caller: Address,
        block_time: u64,
        height: u64,
        tx_hash: Hash,
        exec_addr: Address,
    ) -> Self {
        let span = tracing::info_span!(
            "hashlock_tx",
            tx = %hex::encode(&tx_hash[..8]),
            height,
            caller = %hex::encode(caller),
        );
        Self {
            caller,
            block_time,
            height,
            tx_hash,
            exec_addr,
            span,
        }
    }

    /// Replace the logging span, e.g. with a child of the host's block span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The transaction's logging span.
    pub fn span(&self) -> &Span {
        &self.span
    }
}
