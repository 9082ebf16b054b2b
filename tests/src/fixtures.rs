//! Shared fixtures for integration tests and benchmarks.

use hashlock_executor::{
    create_hash_lock, Address, ExecContext, HashlockConfig, HashlockExecutor, HashlockLock,
    InMemoryKVStore, InMemoryLedger,
};

/// Hashlock contract address.
pub const EXEC: Address = [0xEE; 20];
/// Locker.
pub const ALICE: Address = [0xAA; 20];
/// Recipient.
pub const BOB: Address = [0xBB; 20];
/// Bystander.
pub const CAROL: Address = [0xCC; 20];

/// Balance every fixture executor credits to `ALICE`.
pub const INITIAL_BALANCE: u64 = 1_000_000;

/// Secret used by the scenario tests.
pub const SECRET: &[u8] = b"abc";

/// Executor wired to in-memory adapters.
pub type TestExecutor = HashlockExecutor<InMemoryLedger, InMemoryKVStore, InMemoryKVStore>;

/// Executor with a query cache and `INITIAL_BALANCE` deposited for `ALICE`.
pub fn create_executor() -> TestExecutor {
    let ledger = InMemoryLedger::new();
    ledger.deposit(ALICE, EXEC, INITIAL_BALANCE);
    HashlockExecutor::new(ledger, InMemoryKVStore::new(), HashlockConfig::default())
        .with_query_cache(InMemoryKVStore::new())
}

/// Context for `caller` at `block_time`.
pub fn ctx(caller: Address, block_time: u64) -> ExecContext {
    ExecContext::new(caller, block_time, block_time / 5, [0x11; 32], EXEC)
}

/// Lock action committing to `secret`.
pub fn lock_for(secret: &[u8], to: Address, amount: u64, frozen_time: u64) -> HashlockLock {
    HashlockLock {
        hash: create_hash_lock(secret),
        to_address: to,
        amount,
        frozen_time,
    }
}
