//! Endpoint handlers.
//!
//! `arithmetic` holds the eight operation endpoints; `system` holds the root
//! welcome, health check, and 404 fallback. Handlers are stateless beyond
//! the injected request logger.

pub mod arithmetic;
pub mod system;
