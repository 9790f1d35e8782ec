//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared with the server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable for the process lifetime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - CLI flags override file values after loading

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, ServiceConfig, TimeoutConfig, SERVICE_NAME,
};
pub use validation::{validate_config, ValidationError};
