//! # Hashlock Telemetry
//!
//! Logging and metrics for the hashlock executor.
//!
//! ## Components
//!
//! - **Tracing**: `tracing-subscriber` with env filter, pretty or JSON output
//! - **Logging**: `log_lock_event!` for uniform lock-id fields
//! - **Metrics**: per-executor Prometheus registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hashlock_telemetry::{init_metrics, init_tracing, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_tracing(&config)?;
//! let metrics = init_metrics(&config)?; // None when HL_METRICS=false
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HL_SERVICE_NAME` | `hashlock-executor` | Service name in logs |
//! | `HL_LOG_LEVEL` | `info` | Log level filter |
//! | `HL_JSON_LOGS` | `false` | JSON formatted logs |
//! | `HL_METRICS` | `true` | Record Prometheus metrics |

#![warn(missing_docs)]

mod config;
mod logging;
mod metrics;
mod tracing_setup;

pub use config::{parse_flag, TelemetryConfig};
pub use metrics::{init_metrics, HashlockMetrics, OUTCOME_OK, OUTCOME_REJECTED};
pub use tracing_setup::{init_test_tracing, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    /// Metric creation, registration or encoding failed.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
