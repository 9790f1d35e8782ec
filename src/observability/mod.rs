//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers and interceptors produce:
//!     → request_log.rs (leveled, service-tagged records)
//!     → logging.rs routes them to sinks:
//!         console (compact human-readable)
//!         error file (JSON, error level only)
//!         combined file (JSON, all levels)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - The request logger is an explicit collaborator, not a global
//! - Logging never influences control flow or response content

pub mod logging;
pub mod request_log;

pub use request_log::RequestLogger;
