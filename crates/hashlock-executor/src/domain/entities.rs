//! # Domain Entities
//!
//! The canonical lock record and its cached projection.

use super::errors::{Address, HashlockError, Hash};
use super::value_objects::HashlockStatus;
use serde::{Deserialize, Serialize};

/// Durable state of one hashlock.
///
/// Created by a lock action, mutated in place (status only) by unlock or
/// send, never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    /// SHA-256 commitment; also the storage key suffix.
    pub id: Hash,
    /// Party that may reclaim after the window.
    pub return_address: Address,
    /// Party that may claim by revealing the secret.
    pub to_address: Address,
    /// Amount frozen.
    pub amount: u64,
    /// Block time of creation.
    pub create_time: u64,
    /// Length of the claim window in seconds.
    pub frozen_time: u64,
    /// Current phase.
    pub status: HashlockStatus,
}

/// Parameters for creating a lock record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockRecordParams {
    /// Commitment.
    pub id: Hash,
    /// Locker.
    pub return_address: Address,
    /// Recipient.
    pub to_address: Address,
    /// Amount frozen.
    pub amount: u64,
    /// Block time of creation.
    pub create_time: u64,
    /// Claim window.
    pub frozen_time: u64,
}

impl LockRecord {
    /// Create a new record in `Locked` status.
    pub fn new(params: LockRecordParams) -> Self {
        Self {
            id: params.id,
            return_address: params.return_address,
            to_address: params.to_address,
            amount: params.amount,
            create_time: params.create_time,
            frozen_time: params.frozen_time,
            status: HashlockStatus::Locked,
        }
    }

    /// Seconds since creation, `None` if `block_time` precedes creation.
    pub fn elapsed(&self, block_time: u64) -> Option<u64> {
        block_time.checked_sub(self.create_time)
    }

    /// The claim window has fully elapsed (unlock allowed).
    pub fn window_elapsed(&self, block_time: u64) -> bool {
        self.elapsed(block_time)
            .is_some_and(|elapsed| elapsed >= self.frozen_time)
    }

    /// The claim window is still open (send allowed).
    ///
    /// A block time before creation counts as inside the window.
    pub fn within_window(&self, block_time: u64) -> bool {
        self.elapsed(block_time)
            .map_or(true, |elapsed| elapsed <= self.frozen_time)
    }

    /// Transition to new status.
    pub fn transition_to(&mut self, next: HashlockStatus) -> Result<(), HashlockError> {
        if !self.status.can_transition_to(next) {
            return Err(HashlockError::InvalidStatus {
                current: self.status,
                attempted: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Hex encoded id, for logs.
    pub fn id_hex(&self) -> String {
        hex::encode(self.id)
    }
}

/// Best-effort read projection of a lock, keyed by lock id.
///
/// Not authoritative and never consulted by the transition engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEntry {
    /// Claim window (copy of `frozen_time`).
    pub time: u64,
    /// Last observed status.
    pub status: HashlockStatus,
    /// Copy of `amount`.
    pub amount: u64,
    /// Copy of `create_time`.
    pub create_time: u64,
    /// Caller-supplied observation time.
    pub current_time: u64,
}

impl QueryEntry {
    /// Projection of a record as observed at `observed_time`.
    pub fn observed(record: &LockRecord, observed_time: u64) -> Self {
        Self {
            time: record.frozen_time,
            status: record.status,
            amount: record.amount,
            create_time: record.create_time,
            current_time: observed_time,
        }
    }

    /// Seconds between creation and `current_time`.
    pub fn elapsed(&self) -> u64 {
        self.current_time.saturating_sub(self.create_time)
    }

    /// Seconds left in the claim window at `current_time`.
    pub fn remaining(&self) -> u64 {
        self.time.saturating_sub(self.elapsed())
    }

    /// Still locked and inside the claim window at `current_time`.
    pub fn is_window_open(&self) -> bool {
        self.status == HashlockStatus::Locked && self.elapsed() <= self.time
    }
}
