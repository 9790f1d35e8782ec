//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so an empty config file is valid.

use serde::{Deserialize, Serialize};

/// Constant service tag attached to every structured log record.
pub const SERVICE_NAME: &str = "calculator-microservice";

/// Root configuration for the arithmetic service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings (log level and sinks).
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl ListenerConfig {
    /// Replace the port of the configured bind address.
    ///
    /// Leaves the address untouched when it does not parse; validation
    /// reports that case separately.
    pub fn override_port(&mut self, port: u16) {
        if let Ok(mut addr) = self.bind_address.parse::<std::net::SocketAddr>() {
            addr.set_port(port);
            self.bind_address = addr.to_string();
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
///
/// Log sinks are configuration, not protocol: the console sink uses a
/// human-readable format, both file sinks emit JSON records.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or filter directive (trace, debug, info, warn, error).
    pub log_level: String,

    /// Path of the error-only log file.
    pub error_log_path: String,

    /// Path of the combined (all levels) log file.
    pub combined_log_path: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            error_log_path: "logs/error.log".to_string(),
            combined_log_path: "logs/combined.log".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_port_3000() {
        let config = ServiceConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn empty_toml_is_a_valid_config() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:8088"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8088");
        assert_eq!(config.observability.error_log_path, "logs/error.log");
    }

    #[test]
    fn override_port_rewrites_the_address() {
        let mut listener = ListenerConfig::default();
        listener.override_port(4321);
        assert_eq!(listener.bind_address, "0.0.0.0:4321");
    }

    #[test]
    fn override_port_ignores_unparseable_addresses() {
        let mut listener = ListenerConfig {
            bind_address: "not-an-address".to_string(),
        };
        listener.override_port(4321);
        assert_eq!(listener.bind_address, "not-an-address");
    }
}
