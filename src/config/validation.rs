//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address well-formed)
//! - Check log filter directives and sink paths
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("observability.log_level {0:?} is not a valid filter directive")]
    InvalidLogLevel(String),

    #[error("observability.{0} must not be empty")]
    EmptyLogPath(&'static str),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.error_log_path.is_empty() {
        errors.push(ValidationError::EmptyLogPath("error_log_path"));
    }
    if config.observability.combined_log_path.is_empty() {
        errors.push(ValidationError::EmptyLogPath("combined_log_path"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn filter_directives_are_accepted_as_log_level() {
        let mut config = ServiceConfig::default();
        config.observability.log_level = "calc_service=debug,tower_http=warn".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.timeouts.request_secs = 0;
        config.observability.error_log_path = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
