//! # Hashlock Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs        # Shared accounts, contexts, executors
//! └── integration/
//!     ├── flows.rs       # Lock / send / unlock scenarios
//!     ├── atomicity.rs   # Failure paths leave no trace
//!     ├── query.rs       # Query cache and metrics alongside the executor
//!     └── properties.rs  # proptest invariants
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p hashlock-tests
//!
//! # By category
//! cargo test -p hashlock-tests integration::flows
//! cargo test -p hashlock-tests integration::properties
//!
//! # Benchmarks
//! cargo bench -p hashlock-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
