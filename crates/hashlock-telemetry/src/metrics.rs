//! Prometheus metrics for the hashlock executor.
//!
//! All metrics follow the naming convention: `hashlock_<metric>_<unit>`.
//! Each [`HashlockMetrics`] owns its registry so that several executors (or
//! tests) can run in one process without sharing counters.

use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::{TelemetryConfig, TelemetryError};
use std::sync::Arc;

/// Outcome label for a successful action.
pub const OUTCOME_OK: &str = "ok";

/// Outcome label for a rejected action.
pub const OUTCOME_REJECTED: &str = "rejected";

/// Metrics recorded by the transition engine.
pub struct HashlockMetrics {
    registry: Registry,

    /// Actions processed, labelled by `action` (lock/unlock/send) and `outcome`.
    pub actions: IntCounterVec,

    /// Value currently held in `Locked` records.
    pub value_locked: IntGauge,

    /// Best-effort query cache writes that failed.
    pub cache_failures: IntCounter,
}

impl HashlockMetrics {
    /// Create and register all metrics in a fresh registry.
    pub fn new() -> Result<Self, TelemetryError> {
        let registry = Registry::new();

        let actions = IntCounterVec::new(
            Opts::new("hashlock_actions_total", "Hashlock actions processed"),
            &["action", "outcome"],
        )
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;

        let value_locked = IntGauge::new(
            "hashlock_value_locked",
            "Total amount currently frozen under Locked hashlocks",
        )
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;

        let cache_failures = IntCounter::new(
            "hashlock_cache_failures_total",
            "Query cache updates that failed after a committed action",
        )
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;

        for collector in [
            Box::new(actions.clone()) as Box<dyn prometheus::core::Collector>,
            Box::new(value_locked.clone()),
            Box::new(cache_failures.clone()),
        ] {
            registry
                .register(collector)
                .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
        }

        Ok(Self {
            registry,
            actions,
            value_locked,
            cache_failures,
        })
    }

    /// Record one action outcome.
    pub fn record_action(&self, action: &str, outcome: &str) {
        self.actions.with_label_values(&[action, outcome]).inc();
    }

    /// Current count for an `(action, outcome)` pair.
    pub fn action_count(&self, action: &str, outcome: &str) -> u64 {
        self.actions.with_label_values(&[action, outcome]).get()
    }

    /// Render all metrics in the Prometheus text exposition format.
    pub fn gather_text(&self) -> Result<String, TelemetryError> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
    }
}

/// Build executor metrics unless `metrics_enabled` is off.
pub fn init_metrics(
    config: &TelemetryConfig,
) -> Result<Option<Arc<HashlockMetrics>>, TelemetryError> {
    if !config.metrics_enabled {
        return Ok(None);
    }
    HashlockMetrics::new().map(|metrics| Some(Arc::new(metrics)))
}

impl std::fmt::Debug for HashlockMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashlockMetrics")
            .field("value_locked", &self.value_locked.get())
            .field("cache_failures", &self.cache_failures.get())
            .finish_non_exhaustive()
    }
}
