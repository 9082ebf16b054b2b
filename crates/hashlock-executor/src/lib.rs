//! # Hashlock Executor
//!
//! Hash Time-Locked Contract (HTLC) state machine for a replicated ledger.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Escrow funds under a SHA-256 commitment:
//! - `Lock` freezes the locker's funds in the contract's custody
//! - `Send` releases them to the recipient who reveals the secret in time
//! - `Unlock` returns them to the locker once the claim window has elapsed
//!
//! ## Lifecycle
//!
//! ```text
//!            send (elapsed <= frozen_time, caller == to)
//!          ┌──────────────────────────────────────────► Sent
//! Locked ──┤
//!          └──────────────────────────────────────────► Unlocked
//!            unlock (elapsed >= frozen_time, caller == return)
//! ```
//!
//! Both terminal states are final. Records are never deleted.
//!
//! ## Determinism
//!
//! The executor reads no wall clock: all window checks use the block time
//! in `ExecContext`. It never retries and acquires no locks of its own; the
//! host applies one transaction at a time.
//!
//! ## Module Structure
//!
//! ```text
//! hashlock-executor/
//! ├── domain/          # LockRecord, QueryEntry, actions, errors, invariants
//! ├── algorithms/      # SHA-256 commitments, key derivation
//! ├── ports/           # HashlockApi, HashlockQuery, LedgerAdapter, KeyValueStore
//! ├── adapters/        # InMemoryLedger, InMemoryKVStore
//! ├── store.rs         # Lock record store
//! ├── cache.rs         # Query cache
//! └── service.rs       # Transition engine
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod cache;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod store;

// Re-exports
pub use adapters::{ExecAccount, InMemoryKVStore, InMemoryLedger};
pub use algorithms::{create_hash_lock, generate_random_secret, verify_secret};
pub use cache::QueryCache;
pub use config::HashlockConfig;
pub use domain::{
    Address, ExecContext, ExecStatus, Hash, HashlockAction, HashlockError, HashlockLock,
    HashlockSend, HashlockStatus, HashlockUnlock, KeyValue, LedgerEffects, LockRecord,
    QueryEntry, Receipt, ReceiptLog, SecureSecret,
};
pub use ports::{
    HashlockApi, HashlockQuery, KVStoreError, KeyValueStore, LedgerAdapter, LedgerError,
};
pub use service::HashlockExecutor;
pub use store::LockRecordStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
