//! # Lock Record Store
//!
//! Persists `LockRecord`s under `prefix + raw id`. Records are encoded with
//! bincode; the encoding is part of consensus state, so it must stay stable.

use crate::algorithms::hashlock_key;
use crate::domain::{Hash, HashlockError, KeyValue, LockRecord};
use crate::ports::outbound::KeyValueStore;

/// Typed access to lock records over a raw key-value store.
pub struct LockRecordStore<S> {
    kv: S,
    prefix: Vec<u8>,
}

impl<S: KeyValueStore> LockRecordStore<S> {
    /// Create a store writing under `prefix`.
    pub fn new(kv: S, prefix: Vec<u8>) -> Self {
        Self { kv, prefix }
    }

    /// Storage key of a record.
    pub fn key(&self, id: &Hash) -> Vec<u8> {
        hashlock_key(&self.prefix, id)
    }

    /// Encode a record without writing it.
    pub fn kv_pair(&self, record: &LockRecord) -> Result<KeyValue, HashlockError> {
        let value =
            bincode::serialize(record).map_err(|e| HashlockError::Encode(e.to_string()))?;
        Ok(KeyValue::new(self.key(&record.id), value))
    }

    /// Encode and persist a record, returning the written pair.
    pub fn put(&self, record: &LockRecord) -> Result<KeyValue, HashlockError> {
        let kv = self.kv_pair(record)?;
        self.write(&kv)?;
        Ok(kv)
    }

    /// Persist a pair produced by `kv_pair`.
    pub fn write(&self, kv: &KeyValue) -> Result<(), HashlockError> {
        self.kv.set(&kv.key, &kv.value)?;
        Ok(())
    }

    /// Remove a record. Used to roll back a lock whose ledger call failed.
    pub fn delete(&self, id: &Hash) -> Result<(), HashlockError> {
        self.kv.delete(&self.key(id))?;
        Ok(())
    }

    /// Load a record.
    pub fn get(&self, id: &Hash) -> Result<LockRecord, HashlockError> {
        let bytes = self
            .kv
            .get(&self.key(id))?
            .ok_or(HashlockError::NotFound(*id))?;
        bincode::deserialize(&bytes).map_err(|e| HashlockError::Decode(e.to_string()))
    }

    /// Whether any value is stored under the record key.
    ///
    /// Undecodable bytes still count.
    pub fn exists(&self, id: &Hash) -> Result<bool, HashlockError> {
        Ok(self.kv.exists(&self.key(id))?)
    }

    /// Underlying key-value store.
    pub fn kv(&self) -> &S {
        &self.kv
    }
}
