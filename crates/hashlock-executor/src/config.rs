//! Executor configuration.

use crate::algorithms::hashlock_prefix;
use hashlock_telemetry::parse_flag;
use std::env;

/// Default storage namespace; record keys become `mavl-hashlock-<id>`.
pub const DEFAULT_KEY_NAMESPACE: &str = "mavl";

/// Hashlock executor configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashlockConfig {
    /// Namespace that prefixes every lock record key.
    pub key_namespace: String,
    /// Whether successful actions are mirrored into the query cache.
    pub cache_updates: bool,
}

impl Default for HashlockConfig {
    fn default() -> Self {
        Self {
            key_namespace: DEFAULT_KEY_NAMESPACE.to_string(),
            cache_updates: true,
        }
    }
}

impl HashlockConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HL_KEY_NAMESPACE`: Record key namespace (default: mavl)
    /// - `HL_CACHE_UPDATES`: Mirror actions into the query cache (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            key_namespace: env::var("HL_KEY_NAMESPACE")
                .ok()
                .filter(|ns| !ns.trim().is_empty())
                .unwrap_or(defaults.key_namespace),
            cache_updates: env::var("HL_CACHE_UPDATES")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.cache_updates),
        }
    }

    /// Record key prefix, e.g. `mavl-hashlock-`.
    pub fn key_prefix(&self) -> Vec<u8> {
        hashlock_prefix(&self.key_namespace)
    }
}
