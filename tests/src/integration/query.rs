//! # Query Cache and Metrics
//!
//! The query cache is an advisory projection: it follows successful
//! actions, tolerates its own failures and never gates the ledger.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use hashlock_executor::{
        create_hash_lock, HashlockApi, HashlockConfig, HashlockError, HashlockExecutor,
        HashlockQuery, HashlockSend, HashlockStatus, HashlockUnlock, InMemoryKVStore,
        InMemoryLedger, KeyValueStore, QueryCache, SecureSecret,
    };
    use hashlock_telemetry::{
        init_metrics, HashlockMetrics, TelemetryConfig, OUTCOME_OK, OUTCOME_REJECTED,
    };
    use std::sync::Arc;

    #[test]
    fn test_cache_follows_lock_and_send() {
        let executor = create_executor();
        let id = create_hash_lock(SECRET);
        executor
            .lock(&ctx(ALICE, 1000), &lock_for(SECRET, BOB, 100, 3600))
            .unwrap();

        let cache = executor.query_cache().unwrap();
        let entry = cache.get_txs_by_hashlock_id(&id, 1600).unwrap();
        assert_eq!(entry.status, HashlockStatus::Locked);
        assert_eq!(entry.time, 3600);
        assert_eq!(entry.amount, 100);
        assert_eq!(entry.create_time, 1000);
        assert_eq!(entry.current_time, 1600);
        assert_eq!(entry.remaining(), 3000);
        assert!(entry.is_window_open());

        executor
            .send(
                &ctx(BOB, 1700),
                &HashlockSend {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap();
        let entry = cache.get_txs_by_hashlock_id(&id, 1800).unwrap();
        assert_eq!(entry.status, HashlockStatus::Sent);
        assert!(!entry.is_window_open());
    }

    #[test]
    fn test_cache_unknown_id() {
        let executor = create_executor();
        let cache = executor.query_cache().unwrap();
        assert!(matches!(
            cache.get_txs_by_hashlock_id(&[0u8; 32], 0),
            Err(HashlockError::NotFound(_))
        ));
    }

    #[test]
    fn test_shared_cache_reader() {
        let cache_kv = Arc::new(InMemoryKVStore::new());
        let ledger = InMemoryLedger::new();
        ledger.deposit(ALICE, EXEC, 500);
        let executor =
            HashlockExecutor::new(ledger, InMemoryKVStore::new(), HashlockConfig::default())
                .with_query_cache(cache_kv.clone());

        executor
            .lock(&ctx(ALICE, 1000), &lock_for(SECRET, BOB, 100, 10))
            .unwrap();
        executor
            .unlock(
                &ctx(ALICE, 1010),
                &HashlockUnlock {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap();

        let reader = QueryCache::new(cache_kv);
        let entry = reader
            .get_txs_by_hashlock_id(&create_hash_lock(SECRET), 1020)
            .unwrap();
        assert_eq!(entry.status, HashlockStatus::Unlocked);
    }

    #[test]
    fn test_cache_failure_is_not_fatal() {
        let metrics = init_metrics(&TelemetryConfig::default()).unwrap().unwrap();
        let executor = create_executor().with_metrics(metrics.clone());
        executor.query_cache().unwrap().kv().set_read_only(true);

        executor
            .lock(&ctx(ALICE, 1000), &lock_for(SECRET, BOB, 100, 3600))
            .unwrap();
        executor
            .send(
                &ctx(BOB, 1500),
                &HashlockSend {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap();

        assert_eq!(
            executor
                .records()
                .get(&create_hash_lock(SECRET))
                .unwrap()
                .status,
            HashlockStatus::Sent
        );
        // Lock write failed; send found no entry and skipped
        assert_eq!(metrics.cache_failures.get(), 1);
        assert!(executor.query_cache().unwrap().kv().is_empty());
    }

    #[test]
    fn test_divergent_cache_does_not_gate_actions() {
        let executor = create_executor();
        let id = create_hash_lock(SECRET);
        executor
            .lock(&ctx(ALICE, 1000), &lock_for(SECRET, BOB, 100, 3600))
            .unwrap();

        // Corrupt the cached projection
        executor.query_cache().unwrap().kv().set(&id, b"{").unwrap();

        executor
            .unlock(
                &ctx(ALICE, 4600),
                &HashlockUnlock {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap();
        assert_eq!(
            executor.records().get(&id).unwrap().status,
            HashlockStatus::Unlocked
        );
    }

    #[test]
    fn test_metrics_exposition() {
        let metrics = Arc::new(HashlockMetrics::new().unwrap());
        let executor = create_executor().with_metrics(metrics.clone());

        executor
            .lock(&ctx(ALICE, 1000), &lock_for(SECRET, BOB, 100, 3600))
            .unwrap();
        let _ = executor.send(
            &ctx(CAROL, 1000),
            &HashlockSend {
                secret: SecureSecret::from_slice(SECRET),
            },
        );

        assert_eq!(metrics.action_count("lock", OUTCOME_OK), 1);
        assert_eq!(metrics.action_count("send", OUTCOME_REJECTED), 1);
        assert_eq!(metrics.value_locked.get(), 100);

        let text = metrics.gather_text().unwrap();
        assert!(text.contains("hashlock_actions_total"));
        assert!(text.contains("hashlock_value_locked 100"));
    }
}
