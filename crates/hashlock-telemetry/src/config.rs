//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to the root span
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Whether executors should record Prometheus metrics
    pub metrics_enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "hashlock-executor".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            metrics_enabled: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HL_SERVICE_NAME`: Service name (default: hashlock-executor)
    /// - `HL_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `HL_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `HL_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    /// - `HL_METRICS`: Record Prometheus metrics (default: true)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("HL_SERVICE_NAME")
                .unwrap_or_else(|_| "hashlock-executor".to_string()),

            log_level: env::var("HL_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("HL_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),

            json_logs: env::var("HL_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(is_container),

            metrics_enabled: env::var("HL_METRICS")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

/// Parse a boolean environment flag.
///
/// Anything other than `false`/`0`/`no`/`off` counts as enabled.
pub fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
