//! # Domain Value Objects
//!
//! Immutable value types: lock status, receipt pieces.

use serde::{Deserialize, Serialize};

/// Hashlock state machine.
///
/// Both `Unlocked` and `Sent` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashlockStatus {
    /// Funds frozen, awaiting send or unlock.
    Locked,
    /// Window elapsed, funds returned to the locker.
    Unlocked,
    /// Secret revealed, funds transferred to the recipient.
    Sent,
}

impl HashlockStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: HashlockStatus) -> bool {
        match (self, next) {
            (Self::Locked, Self::Unlocked) => true,
            (Self::Locked, Self::Sent) => true,
            (Self::Locked, Self::Locked) => false,
            (Self::Unlocked | Self::Sent, _) => false,
        }
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Unlocked | Self::Sent)
    }

    /// Numeric code used in log fields (1 locked, 2 unlocked, 3 sent).
    pub fn code(&self) -> u8 {
        match self {
            Self::Locked => 1,
            Self::Unlocked => 2,
            Self::Sent => 3,
        }
    }
}

/// A state-change key/value pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Storage key.
    pub key: Vec<u8>,
    /// Encoded value.
    pub value: Vec<u8>,
}

impl KeyValue {
    /// Create a new pair.
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A ledger log entry. `ty` is owned by the ledger; the executor never
/// interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLog {
    /// Ledger-defined log type.
    pub ty: u32,
    /// Encoded log body.
    pub payload: Vec<u8>,
}

/// Effects of one ledger operation, in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerEffects {
    /// Ledger log entries.
    pub logs: Vec<ReceiptLog>,
    /// Balance key/value deltas.
    pub kv: Vec<KeyValue>,
}

/// Execution status carried by a receipt.
///
/// Failed actions produce an error instead of a receipt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecStatus {
    /// Action applied.
    Ok,
}

/// Receipt of a successful action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Execution status.
    pub status: ExecStatus,
    /// Ledger deltas followed by the record's own key/value.
    pub kv: Vec<KeyValue>,
    /// Ledger log entries.
    pub logs: Vec<ReceiptLog>,
}

impl Receipt {
    /// Combine ledger effects with the record write.
    pub fn ok(effects: LedgerEffects, record_kv: KeyValue) -> Self {
        let LedgerEffects { logs, mut kv } = effects;
        kv.push(record_kv);
        Self {
            status: ExecStatus::Ok,
            kv,
            logs,
        }
    }

    /// The record's own key/value (always last).
    pub fn record_kv(&self) -> Option<&KeyValue> {
        self.kv.last()
    }
}
