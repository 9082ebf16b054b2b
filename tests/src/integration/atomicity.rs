//! # Failure Atomicity
//!
//! A rejected action returns no receipt and leaves both the lock record and
//! the ledger as they were, whether the failure comes from a check, the
//! ledger or the state store.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use hashlock_executor::{
        create_hash_lock, ExecAccount, HashlockApi, HashlockError, HashlockSend, HashlockStatus,
        HashlockUnlock, KeyValueStore, LedgerError, SecureSecret,
    };

    fn locked_executor() -> TestExecutor {
        let executor = create_executor();
        executor
            .lock(&ctx(ALICE, 1000), &lock_for(SECRET, BOB, 100, 3600))
            .unwrap();
        executor
    }

    #[test]
    fn test_lock_insufficient_balance() {
        let executor = create_executor();
        let lock = lock_for(SECRET, BOB, INITIAL_BALANCE + 1, 3600);

        let err = executor.lock(&ctx(ALICE, 1000), &lock).unwrap_err();
        assert!(matches!(
            err,
            HashlockError::Ledger(LedgerError::InsufficientBalance { .. })
        ));
        assert!(!executor.records().exists(&lock.hash).unwrap());
        assert!(executor.records().kv().is_empty());
    }

    #[test]
    fn test_lock_zero_amount_propagates_ledger_error() {
        let executor = create_executor();
        let lock = lock_for(SECRET, BOB, 0, 3600);

        let err = executor.lock(&ctx(ALICE, 1000), &lock).unwrap_err();
        assert!(matches!(
            err,
            HashlockError::Ledger(LedgerError::InvalidAmount(0))
        ));
        assert!(!executor.records().exists(&lock.hash).unwrap());
    }

    #[test]
    fn test_duplicate_lock_keeps_original() {
        let executor = locked_executor();
        let before = executor.records().get(&create_hash_lock(SECRET)).unwrap();

        let err = executor
            .lock(&ctx(ALICE, 2000), &lock_for(SECRET, CAROL, 500, 10))
            .unwrap_err();
        assert!(matches!(err, HashlockError::DuplicateLock(_)));
        assert_eq!(
            executor.records().get(&create_hash_lock(SECRET)).unwrap(),
            before
        );
        assert_eq!(executor.ledger().account(&ALICE, &EXEC).frozen, 100);
    }

    #[test]
    fn test_malformed_record_still_blocks_lock() {
        let executor = create_executor();
        let lock = lock_for(SECRET, BOB, 100, 3600);
        let key = executor.records().key(&lock.hash);
        executor.records().kv().set(&key, b"garbage").unwrap();

        let err = executor.lock(&ctx(ALICE, 1000), &lock).unwrap_err();
        assert!(matches!(err, HashlockError::DuplicateLock(_)));

        let err = executor
            .send(
                &ctx(BOB, 1500),
                &HashlockSend {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap_err();
        assert!(matches!(err, HashlockError::Decode(_)));
    }

    #[test]
    fn test_send_ledger_failure_keeps_record_locked() {
        let executor = locked_executor();
        executor.ledger().set_unavailable(true);

        let err = executor
            .send(
                &ctx(BOB, 1500),
                &HashlockSend {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap_err();
        assert!(matches!(err, HashlockError::Ledger(LedgerError::Backend(_))));
        assert_eq!(
            executor
                .records()
                .get(&create_hash_lock(SECRET))
                .unwrap()
                .status,
            HashlockStatus::Locked
        );

        // Recovers once the ledger is back
        executor.ledger().set_unavailable(false);
        executor
            .send(
                &ctx(BOB, 1500),
                &HashlockSend {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap();
    }

    #[test]
    fn test_unlock_ledger_failure_keeps_record_locked() {
        let executor = locked_executor();
        executor.ledger().set_unavailable(true);

        let err = executor
            .unlock(
                &ctx(ALICE, 5000),
                &HashlockUnlock {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap_err();
        assert!(matches!(err, HashlockError::Ledger(_)));
        assert_eq!(
            executor
                .records()
                .get(&create_hash_lock(SECRET))
                .unwrap()
                .status,
            HashlockStatus::Locked
        );
        assert_eq!(executor.ledger().account(&ALICE, &EXEC).frozen, 100);
    }

    #[test]
    fn test_rejected_checks_never_touch_ledger() {
        let executor = locked_executor();
        let before = executor.ledger().account(&ALICE, &EXEC);
        let secret = || SecureSecret::from_slice(SECRET);

        let _ = executor.unlock(&ctx(BOB, 5000), &HashlockUnlock { secret: secret() });
        let _ = executor.unlock(&ctx(ALICE, 2000), &HashlockUnlock { secret: secret() });
        let _ = executor.send(&ctx(CAROL, 1500), &HashlockSend { secret: secret() });
        let _ = executor.send(&ctx(BOB, 9000), &HashlockSend { secret: secret() });

        assert_eq!(executor.ledger().account(&ALICE, &EXEC), before);
        assert_eq!(executor.ledger().account(&BOB, &EXEC), ExecAccount::default());
    }

    #[test]
    fn test_lock_storage_failure_keeps_funds_spendable() {
        let executor = create_executor();
        executor.records().kv().set_read_only(true);
        let lock = lock_for(SECRET, BOB, 100, 3600);

        let err = executor.lock(&ctx(ALICE, 1000), &lock).unwrap_err();
        assert!(matches!(err, HashlockError::Storage(_)));
        assert_eq!(
            executor.ledger().account(&ALICE, &EXEC),
            ExecAccount {
                balance: INITIAL_BALANCE,
                frozen: 0
            }
        );
        assert!(!executor.records().exists(&lock.hash).unwrap());
        assert!(executor.query_cache().unwrap().kv().is_empty());
    }

    #[test]
    fn test_unlock_storage_failure_keeps_funds_frozen() {
        let executor = locked_executor();
        executor.records().kv().set_read_only(true);

        let err = executor
            .unlock(
                &ctx(ALICE, 5000),
                &HashlockUnlock {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap_err();
        assert!(matches!(err, HashlockError::Storage(_)));
        assert_eq!(
            executor.ledger().account(&ALICE, &EXEC),
            ExecAccount {
                balance: INITIAL_BALANCE - 100,
                frozen: 100
            }
        );
        assert_eq!(
            executor
                .records()
                .get(&create_hash_lock(SECRET))
                .unwrap()
                .status,
            HashlockStatus::Locked
        );
    }

    #[test]
    fn test_send_storage_failure_moves_nothing() {
        let executor = locked_executor();
        executor.records().kv().set_read_only(true);

        let err = executor
            .send(
                &ctx(BOB, 1500),
                &HashlockSend {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap_err();
        assert!(matches!(err, HashlockError::Storage(_)));
        assert_eq!(executor.ledger().account(&ALICE, &EXEC).frozen, 100);
        assert_eq!(executor.ledger().account(&BOB, &EXEC), ExecAccount::default());

        // Claim succeeds once the store accepts writes again
        executor.records().kv().set_read_only(false);
        executor
            .send(
                &ctx(BOB, 1500),
                &HashlockSend {
                    secret: SecureSecret::from_slice(SECRET),
                },
            )
            .unwrap();
        assert_eq!(executor.ledger().account(&BOB, &EXEC).balance, 100);
    }

    #[test]
    fn test_lock_ledger_failure_removes_written_record() {
        let executor = create_executor();
        executor.ledger().set_unavailable(true);
        let lock = lock_for(SECRET, BOB, 100, 3600);

        let err = executor.lock(&ctx(ALICE, 1000), &lock).unwrap_err();
        assert!(matches!(err, HashlockError::Ledger(LedgerError::Backend(_))));
        assert!(executor.records().kv().is_empty());

        executor.ledger().set_unavailable(false);
        executor.lock(&ctx(ALICE, 1000), &lock).unwrap();
    }
}
