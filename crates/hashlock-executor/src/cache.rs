//! # Query Cache
//!
//! Denormalized, advisory view of lock status for external readers. Entries
//! are JSON encoded and keyed by the raw lock id in the cache's own store.
//!
//! The cache is never consulted by the transition engine. It can lag or
//! diverge from the lock records.

use crate::algorithms::query_cache_key;
use crate::domain::{Hash, HashlockError, HashlockStatus, KeyValue, QueryEntry};
use crate::ports::inbound::HashlockQuery;
use crate::ports::outbound::KeyValueStore;
use tracing::debug;

/// Query cache over a key-value store.
pub struct QueryCache<C> {
    kv: C,
}

impl<C: KeyValueStore> QueryCache<C> {
    /// Create a cache backed by `kv`.
    pub fn new(kv: C) -> Self {
        Self { kv }
    }

    /// Cached entry for `id`.
    pub fn get(&self, id: &Hash) -> Result<QueryEntry, HashlockError> {
        let bytes = self
            .kv
            .get(&query_cache_key(id))?
            .ok_or(HashlockError::NotFound(*id))?;
        serde_json::from_slice(&bytes).map_err(|e| HashlockError::Decode(e.to_string()))
    }

    /// Overwrite the entry for `id` unconditionally.
    pub fn set(&self, id: &Hash, entry: &QueryEntry) -> Result<KeyValue, HashlockError> {
        let value = serde_json::to_vec(entry).map_err(|e| HashlockError::Encode(e.to_string()))?;
        let kv = KeyValue::new(query_cache_key(id), value);
        self.kv.set(&kv.key, &kv.value)?;
        Ok(kv)
    }

    /// Reconcile the entry with an observed transition.
    ///
    /// - `Locked` with no entry: create one from `incoming`.
    /// - `Unlocked`/`Sent` with an entry: overwrite its status only.
    /// - Anything else leaves the entry untouched and returns `None`.
    pub fn update(
        &self,
        id: &Hash,
        incoming: &QueryEntry,
    ) -> Result<Option<KeyValue>, HashlockError> {
        let existing = match self.get(id) {
            Ok(entry) => Some(entry),
            Err(HashlockError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        match (incoming.status, existing) {
            (HashlockStatus::Locked, None) => {
                let entry = QueryEntry {
                    time: incoming.time,
                    status: HashlockStatus::Locked,
                    amount: incoming.amount,
                    create_time: incoming.create_time,
                    current_time: 0,
                };
                self.set(id, &entry).map(Some)
            }
            (status @ (HashlockStatus::Unlocked | HashlockStatus::Sent), Some(mut entry)) => {
                entry.status = status;
                self.set(id, &entry).map(Some)
            }
            (status, existing) => {
                debug!(
                    lock_id = %hex::encode(id),
                    incoming = ?status,
                    cached = ?existing.map(|e| e.status),
                    "Query cache update skipped"
                );
                Ok(None)
            }
        }
    }

    /// Cached entry stamped with `observed_time`. The stored entry is not
    /// modified.
    pub fn query_by_lock_id(
        &self,
        id: &Hash,
        observed_time: u64,
    ) -> Result<QueryEntry, HashlockError> {
        let mut entry = self.get(id)?;
        entry.current_time = observed_time;
        Ok(entry)
    }

    /// Underlying key-value store.
    pub fn kv(&self) -> &C {
        &self.kv
    }
}

impl<C: KeyValueStore> HashlockQuery for QueryCache<C> {
    fn get_txs_by_hashlock_id(
        &self,
        id: &Hash,
        observed_time: u64,
    ) -> Result<QueryEntry, HashlockError> {
        self.query_by_lock_id(id, observed_time)
    }
}
