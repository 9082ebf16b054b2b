//! # Domain Invariants
//!
//! Preconditions checked by the transition engine before it touches the
//! ledger. Each returns the error the action must abort with.

use super::entities::LockRecord;
use super::errors::{Address, HashlockError};
use super::value_objects::HashlockStatus;

/// Invariant: only the locker may reclaim.
pub fn invariant_return_address(record: &LockRecord, caller: &Address) -> Result<(), HashlockError> {
    if record.return_address != *caller {
        return Err(HashlockError::WrongReturnAddress);
    }
    Ok(())
}

/// Invariant: only the designated recipient may claim.
pub fn invariant_send_address(record: &LockRecord, caller: &Address) -> Result<(), HashlockError> {
    if record.to_address != *caller {
        return Err(HashlockError::WrongSendAddress);
    }
    Ok(())
}

/// Invariant: the record can move to `next` (only from `Locked`).
pub fn invariant_status_allows(
    record: &LockRecord,
    next: HashlockStatus,
) -> Result<(), HashlockError> {
    if !record.status.can_transition_to(next) {
        return Err(HashlockError::InvalidStatus {
            current: record.status,
            attempted: next,
        });
    }
    Ok(())
}

/// Invariant: the claim window has fully elapsed (unlock).
pub fn invariant_window_elapsed(record: &LockRecord, block_time: u64) -> Result<(), HashlockError> {
    if !record.window_elapsed(block_time) {
        return Err(HashlockError::WindowNotElapsed {
            elapsed: record.elapsed(block_time).unwrap_or(0),
            frozen_time: record.frozen_time,
        });
    }
    Ok(())
}

/// Invariant: the claim window is still open (send).
pub fn invariant_within_window(record: &LockRecord, block_time: u64) -> Result<(), HashlockError> {
    if !record.within_window(block_time) {
        return Err(HashlockError::WindowExceeded {
            elapsed: record.elapsed(block_time).unwrap_or(0),
            frozen_time: record.frozen_time,
        });
    }
    Ok(())
}
