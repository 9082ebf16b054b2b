//! # Integration Tests
//!
//! End-to-end behaviour of the executor over in-memory adapters.

pub mod atomicity;
pub mod query;
