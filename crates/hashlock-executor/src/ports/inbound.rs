//! # Inbound Ports
//!
//! What the hashlock executor offers to the host framework.

use crate::domain::{
    ExecContext, Hash, HashlockAction, HashlockError, HashlockLock, HashlockSend,
    HashlockUnlock, QueryEntry, Receipt,
};

/// Transaction execution API - inbound port.
///
/// Each call runs one action to completion. The record is written before
/// the ledger is called and restored if the ledger call fails, so on error
/// the record and the ledger are left as they were.
pub trait HashlockApi {
    /// Freeze funds under a new commitment.
    fn lock(&self, ctx: &ExecContext, lock: &HashlockLock) -> Result<Receipt, HashlockError>;

    /// Return frozen funds to the locker after the window.
    fn unlock(&self, ctx: &ExecContext, unlock: &HashlockUnlock)
        -> Result<Receipt, HashlockError>;

    /// Transfer frozen funds to the recipient inside the window.
    fn send(&self, ctx: &ExecContext, send: &HashlockSend) -> Result<Receipt, HashlockError>;

    /// Dispatch any action.
    fn exec(&self, ctx: &ExecContext, action: &HashlockAction) -> Result<Receipt, HashlockError> {
        match action {
            HashlockAction::Lock(lock) => self.lock(ctx, lock),
            HashlockAction::Unlock(unlock) => self.unlock(ctx, unlock),
            HashlockAction::Send(send) => self.send(ctx, send),
        }
    }
}

/// Read-only status query - inbound port.
pub trait HashlockQuery {
    /// Cached status of a lock, stamped with `observed_time`.
    fn get_txs_by_hashlock_id(
        &self,
        id: &Hash,
        observed_time: u64,
    ) -> Result<QueryEntry, HashlockError>;
}
