//! Structured logging helpers.
//!
//! Lock events share a fixed set of fields so that log pipelines can join
//! them by lock id:
//! - `subsystem`: always `hashlock`
//! - `lock_id`: hex encoded commitment
//! - `action`: lock / unlock / send / query

/// Log a lock-related event with standard fields.
///
/// `$lock_id` must implement `Display` (the executor passes a hex string).
#[macro_export]
macro_rules! log_lock_event {
    ($level:ident, $action:expr, $msg:expr, $lock_id:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = "hashlock",
            action = $action,
            lock_id = %$lock_id,
            $($($field)*,)?
            $msg
        )
    };
}
