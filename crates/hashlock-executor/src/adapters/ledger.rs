//! In-memory account ledger.
//!
//! Implements `LedgerAdapter` over per-contract sub-accounts, each with a
//! spendable and a frozen balance. Every mutation emits one log entry and
//! one key/value delta per touched account.

use crate::domain::{Address, KeyValue, LedgerEffects, ReceiptLog};
use crate::ports::outbound::{LedgerAdapter, LedgerError};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Log type: balance moved to frozen.
pub const LOG_EXEC_FROZEN: u32 = 1;
/// Log type: frozen balance moved back to spendable.
pub const LOG_EXEC_ACTIVE: u32 = 2;
/// Log type: frozen balance moved to another account.
pub const LOG_EXEC_TRANSFER_FROZEN: u32 = 3;

/// Prefix of sub-account keys in the ledger's KV deltas.
pub const EXEC_ACCOUNT_KEY_PREFIX: &str = "mavl-coins-exec-";

/// One owner's sub-account under a contract address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecAccount {
    /// Spendable balance.
    pub balance: u64,
    /// Frozen balance.
    pub frozen: u64,
}

/// Log payload: account state before and after a mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountChange {
    /// Account owner.
    pub owner: Address,
    /// Contract address.
    pub exec_addr: Address,
    /// State before.
    pub prev: ExecAccount,
    /// State after.
    pub current: ExecAccount,
}

/// In-memory ledger for tests and embedding.
#[derive(Default)]
pub struct InMemoryLedger {
    accounts: RwLock<HashMap<(Address, Address), ExecAccount>>,
    unavailable: AtomicBool,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit spendable balance (test setup / deposits).
    pub fn deposit(&self, owner: Address, exec_addr: Address, amount: u64) {
        let mut accounts = self.accounts.write();
        let account = accounts.entry((owner, exec_addr)).or_default();
        account.balance = account.balance.saturating_add(amount);
    }

    /// Current sub-account state (zero if never touched).
    pub fn account(&self, owner: &Address, exec_addr: &Address) -> ExecAccount {
        self.accounts
            .read()
            .get(&(*owner, *exec_addr))
            .copied()
            .unwrap_or_default()
    }

    /// Make every operation fail with a backend error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Sub-account key: prefix + hex(exec_addr) + ":" + hex(owner).
    pub fn account_key(owner: &Address, exec_addr: &Address) -> Vec<u8> {
        format!(
            "{}{}:{}",
            EXEC_ACCOUNT_KEY_PREFIX,
            hex::encode(exec_addr),
            hex::encode(owner)
        )
        .into_bytes()
    }

    fn check_available(&self, amount: u64) -> Result<(), LedgerError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LedgerError::Backend("ledger unavailable".to_string()));
        }
        if amount == 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        Ok(())
    }

    /// Write all `updates` and describe them; nothing is written if encoding fails.
    fn commit(
        &self,
        accounts: &mut HashMap<(Address, Address), ExecAccount>,
        ty: u32,
        updates: Vec<(Address, Address, ExecAccount, ExecAccount)>,
    ) -> Result<LedgerEffects, LedgerError> {
        let mut effects = LedgerEffects::default();
        for (owner, exec_addr, prev, current) in &updates {
            let change = AccountChange {
                owner: *owner,
                exec_addr: *exec_addr,
                prev: *prev,
                current: *current,
            };
            let payload =
                bincode::serialize(&change).map_err(|e| LedgerError::Backend(e.to_string()))?;
            let value =
                bincode::serialize(current).map_err(|e| LedgerError::Backend(e.to_string()))?;
            effects.logs.push(ReceiptLog { ty, payload });
            effects
                .kv
                .push(KeyValue::new(Self::account_key(owner, exec_addr), value));
        }
        for (owner, exec_addr, _, current) in updates {
            accounts.insert((owner, exec_addr), current);
        }
        Ok(effects)
    }
}

impl LedgerAdapter for InMemoryLedger {
    fn freeze(
        &self,
        from: &Address,
        exec_addr: &Address,
        amount: u64,
    ) -> Result<LedgerEffects, LedgerError> {
        self.check_available(amount)?;
        let mut accounts = self.accounts.write();
        let prev = accounts.get(&(*from, *exec_addr)).copied().unwrap_or_default();
        if prev.balance < amount {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                available: prev.balance,
            });
        }
        let current = ExecAccount {
            balance: prev.balance - amount,
            frozen: prev.frozen.checked_add(amount).ok_or(LedgerError::Overflow)?,
        };
        debug!(amount, "Ledger freeze");
        self.commit(
            &mut accounts,
            LOG_EXEC_FROZEN,
            vec![(*from, *exec_addr, prev, current)],
        )
    }

    fn reactivate(
        &self,
        owner: &Address,
        exec_addr: &Address,
        amount: u64,
    ) -> Result<LedgerEffects, LedgerError> {
        self.check_available(amount)?;
        let mut accounts = self.accounts.write();
        let prev = accounts.get(&(*owner, *exec_addr)).copied().unwrap_or_default();
        if prev.frozen < amount {
            return Err(LedgerError::InsufficientFrozen {
                required: amount,
                available: prev.frozen,
            });
        }
        let current = ExecAccount {
            balance: prev.balance.checked_add(amount).ok_or(LedgerError::Overflow)?,
            frozen: prev.frozen - amount,
        };
        debug!(amount, "Ledger reactivate");
        self.commit(
            &mut accounts,
            LOG_EXEC_ACTIVE,
            vec![(*owner, *exec_addr, prev, current)],
        )
    }

    fn transfer_frozen(
        &self,
        from: &Address,
        to: &Address,
        exec_addr: &Address,
        amount: u64,
    ) -> Result<LedgerEffects, LedgerError> {
        self.check_available(amount)?;
        let mut accounts = self.accounts.write();
        let from_prev = accounts.get(&(*from, *exec_addr)).copied().unwrap_or_default();
        if from_prev.frozen < amount {
            return Err(LedgerError::InsufficientFrozen {
                required: amount,
                available: from_prev.frozen,
            });
        }
        let from_current = ExecAccount {
            balance: from_prev.balance,
            frozen: from_prev.frozen - amount,
        };

        // Self-transfer collapses to a reactivate on one account
        if from == to {
            let current = ExecAccount {
                balance: from_prev
                    .balance
                    .checked_add(amount)
                    .ok_or(LedgerError::Overflow)?,
                frozen: from_current.frozen,
            };
            return self.commit(
                &mut accounts,
                LOG_EXEC_TRANSFER_FROZEN,
                vec![(*from, *exec_addr, from_prev, current)],
            );
        }

        let to_prev = accounts.get(&(*to, *exec_addr)).copied().unwrap_or_default();
        let to_current = ExecAccount {
            balance: to_prev.balance.checked_add(amount).ok_or(LedgerError::Overflow)?,
            frozen: to_prev.frozen,
        };
        debug!(amount, "Ledger transfer frozen");
        self.commit(
            &mut accounts,
            LOG_EXEC_TRANSFER_FROZEN,
            vec![
                (*from, *exec_addr, from_prev, from_current),
                (*to, *exec_addr, to_prev, to_current),
            ],
        )
    }
}
