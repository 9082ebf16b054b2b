//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports.

mod ledger;
mod memory_kv;

pub use ledger::{
    AccountChange, ExecAccount, InMemoryLedger, EXEC_ACCOUNT_KEY_PREFIX, LOG_EXEC_ACTIVE,
    LOG_EXEC_FROZEN, LOG_EXEC_TRANSFER_FROZEN,
};
pub use memory_kv::InMemoryKVStore;
