//! # Hashlock Executor
//!
//! The HTLC transition engine. Each action validates against the stored
//! record, writes the new record, then moves funds through the ledger port.
//!
//! ## Ordering
//!
//! A failed record write aborts before the ledger is touched. A failed
//! ledger call rolls the record back to its previous bytes (or deletes it
//! for a lock), so an error leaves neither funds nor record changed.

use crate::algorithms::{create_hash_lock, verify_secret};
use crate::cache::QueryCache;
use crate::config::HashlockConfig;
use crate::domain::{
    invariant_return_address, invariant_send_address, invariant_status_allows,
    invariant_window_elapsed, invariant_within_window, ExecContext, Hash, HashlockError,
    HashlockLock, HashlockSend, HashlockStatus, HashlockUnlock, LockRecord, LockRecordParams,
    QueryEntry, Receipt,
};
use crate::ports::inbound::HashlockApi;
use crate::ports::outbound::{KeyValueStore, LedgerAdapter};
use crate::store::LockRecordStore;
use hashlock_telemetry::{log_lock_event, HashlockMetrics, OUTCOME_OK, OUTCOME_REJECTED};
use std::sync::Arc;
use tracing::{debug, error, warn};

const ACTION_LOCK: &str = "lock";
const ACTION_UNLOCK: &str = "unlock";
const ACTION_SEND: &str = "send";

/// HTLC executor over a ledger and a state store, with an optional query
/// cache (`C`) and optional metrics.
pub struct HashlockExecutor<L, S, C = S> {
    config: HashlockConfig,
    ledger: L,
    records: LockRecordStore<S>,
    cache: Option<QueryCache<C>>,
    metrics: Option<Arc<HashlockMetrics>>,
}

impl<L: LedgerAdapter, S: KeyValueStore> HashlockExecutor<L, S> {
    /// Create an executor without query cache or metrics.
    pub fn new(ledger: L, state: S, config: HashlockConfig) -> Self {
        let records = LockRecordStore::new(state, config.key_prefix());
        Self {
            config,
            ledger,
            records,
            cache: None,
            metrics: None,
        }
    }
}

impl<L, S, C> HashlockExecutor<L, S, C> {
    /// Mirror successful actions into a query cache backed by `cache_kv`.
    pub fn with_query_cache<C2: KeyValueStore>(self, cache_kv: C2) -> HashlockExecutor<L, S, C2> {
        HashlockExecutor {
            config: self.config,
            ledger: self.ledger,
            records: self.records,
            cache: Some(QueryCache::new(cache_kv)),
            metrics: self.metrics,
        }
    }

    /// Record action outcomes and locked value.
    pub fn with_metrics(mut self, metrics: Arc<HashlockMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &HashlockConfig {
        &self.config
    }

    /// Ledger port.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Lock record store.
    pub fn records(&self) -> &LockRecordStore<S> {
        &self.records
    }

    /// Query cache, if attached.
    pub fn query_cache(&self) -> Option<&QueryCache<C>> {
        self.cache.as_ref()
    }
}

impl<L, S, C> HashlockExecutor<L, S, C>
where
    L: LedgerAdapter,
    S: KeyValueStore,
    C: KeyValueStore,
{
    fn apply_lock(
        &self,
        ctx: &ExecContext,
        lock: &HashlockLock,
    ) -> Result<(Receipt, LockRecord), HashlockError> {
        if self.records.exists(&lock.hash)? {
            return Err(HashlockError::DuplicateLock(lock.hash));
        }

        let record = LockRecord::new(LockRecordParams {
            id: lock.hash,
            return_address: ctx.caller,
            to_address: lock.to_address,
            amount: lock.amount,
            create_time: ctx.block_time,
            frozen_time: lock.frozen_time,
        });
        let record_kv = self.records.put(&record)?;

        let effects = match self.ledger.freeze(&ctx.caller, &ctx.exec_addr, lock.amount) {
            Ok(effects) => effects,
            Err(err) => {
                self.roll_back(&record.id, None);
                return Err(err.into());
            }
        };

        Ok((Receipt::ok(effects, record_kv), record))
    }

    fn apply_unlock(
        &self,
        ctx: &ExecContext,
        id: &Hash,
        secret: &[u8],
    ) -> Result<(Receipt, LockRecord), HashlockError> {
        let previous = self.load_opened_by(id, secret)?;
        invariant_return_address(&previous, &ctx.caller)?;
        invariant_status_allows(&previous, HashlockStatus::Unlocked)?;
        invariant_window_elapsed(&previous, ctx.block_time)?;

        let mut record = previous.clone();
        record.transition_to(HashlockStatus::Unlocked)?;
        let record_kv = self.records.put(&record)?;

        let effects =
            match self
                .ledger
                .reactivate(&record.return_address, &ctx.exec_addr, record.amount)
            {
                Ok(effects) => effects,
                Err(err) => {
                    self.roll_back(id, Some(&previous));
                    return Err(err.into());
                }
            };

        Ok((Receipt::ok(effects, record_kv), record))
    }

    fn apply_send(
        &self,
        ctx: &ExecContext,
        id: &Hash,
        secret: &[u8],
    ) -> Result<(Receipt, LockRecord), HashlockError> {
        let previous = self.load_opened_by(id, secret)?;
        invariant_status_allows(&previous, HashlockStatus::Sent)?;
        invariant_send_address(&previous, &ctx.caller)?;
        invariant_within_window(&previous, ctx.block_time)?;

        let mut record = previous.clone();
        record.transition_to(HashlockStatus::Sent)?;
        let record_kv = self.records.put(&record)?;

        let effects = match self.ledger.transfer_frozen(
            &record.return_address,
            &record.to_address,
            &ctx.exec_addr,
            record.amount,
        ) {
            Ok(effects) => effects,
            Err(err) => {
                self.roll_back(id, Some(&previous));
                return Err(err.into());
            }
        };

        Ok((Receipt::ok(effects, record_kv), record))
    }

    /// Load the record stored under `id` and check that `secret` opens it.
    fn load_opened_by(&self, id: &Hash, secret: &[u8]) -> Result<LockRecord, HashlockError> {
        let record = self.records.get(id)?;
        if !verify_secret(secret, &record.id) {
            return Err(HashlockError::Decode(
                "record id does not match its key".to_string(),
            ));
        }
        Ok(record)
    }

    /// Undo a record write after the ledger rejected the action: restore
    /// `previous`, or delete the record when there was none.
    fn roll_back(&self, id: &Hash, previous: Option<&LockRecord>) {
        let restored = match previous {
            Some(record) => self.records.put(record).map(|_| ()),
            None => self.records.delete(id),
        };
        if let Err(err) = restored {
            error!(lock_id = %hex::encode(id), error = %err, "Lock record rollback failed");
        }
    }

    /// Log, count and mirror the outcome of an action.
    fn finish(
        &self,
        action: &'static str,
        id: &Hash,
        result: Result<(Receipt, LockRecord), HashlockError>,
    ) -> Result<Receipt, HashlockError> {
        let lock_id = hex::encode(id);
        match result {
            Ok((receipt, record)) => {
                log_lock_event!(
                    info,
                    action,
                    "Hashlock action applied",
                    lock_id,
                    status = record.status.code(),
                    amount = record.amount
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_action(action, OUTCOME_OK);
                    match i64::try_from(record.amount) {
                        Ok(amount) if record.status.is_terminal() => {
                            metrics.value_locked.sub(amount)
                        }
                        Ok(amount) => metrics.value_locked.add(amount),
                        Err(_) => warn!(
                            amount = record.amount,
                            "Amount exceeds gauge range; value_locked not updated"
                        ),
                    }
                }
                self.notify_cache(&record);
                Ok(receipt)
            }
            Err(err) => {
                match &err {
                    HashlockError::Ledger(_)
                    | HashlockError::Storage(_)
                    | HashlockError::Encode(_)
                    | HashlockError::Decode(_) => {
                        error!(action, lock_id = %lock_id, kind = err.kind(), error = %err, "Hashlock action failed");
                    }
                    _ => {
                        warn!(action, lock_id = %lock_id, kind = err.kind(), error = %err, "Hashlock action rejected");
                    }
                }
                if let Some(metrics) = &self.metrics {
                    metrics.record_action(action, OUTCOME_REJECTED);
                }
                Err(err)
            }
        }
    }

    /// Best-effort cache update; failures never reach the caller.
    fn notify_cache(&self, record: &LockRecord) {
        if !self.config.cache_updates {
            return;
        }
        let Some(cache) = &self.cache else {
            return;
        };

        match cache.update(&record.id, &QueryEntry::observed(record, 0)) {
            Ok(Some(_)) => debug!(status = record.status.code(), "Query cache updated"),
            Ok(None) => {}
            Err(err) => {
                warn!(lock_id = %record.id_hex(), error = %err, "Query cache update failed");
                if let Some(metrics) = &self.metrics {
                    metrics.cache_failures.inc();
                }
            }
        }
    }
}

impl<L, S, C> HashlockApi for HashlockExecutor<L, S, C>
where
    L: LedgerAdapter,
    S: KeyValueStore,
    C: KeyValueStore,
{
    fn lock(&self, ctx: &ExecContext, lock: &HashlockLock) -> Result<Receipt, HashlockError> {
        let _entered = ctx.span().enter();
        let result = self.apply_lock(ctx, lock);
        self.finish(ACTION_LOCK, &lock.hash, result)
    }

    fn unlock(
        &self,
        ctx: &ExecContext,
        unlock: &HashlockUnlock,
    ) -> Result<Receipt, HashlockError> {
        let _entered = ctx.span().enter();
        let id = create_hash_lock(unlock.secret.as_bytes());
        let result = self.apply_unlock(ctx, &id, unlock.secret.as_bytes());
        self.finish(ACTION_UNLOCK, &id, result)
    }

    fn send(&self, ctx: &ExecContext, send: &HashlockSend) -> Result<Receipt, HashlockError> {
        let _entered = ctx.span().enter();
        let id = create_hash_lock(send.secret.as_bytes());
        let result = self.apply_send(ctx, &id, send.secret.as_bytes());
        self.finish(ACTION_SEND, &id, result)
    }
}
