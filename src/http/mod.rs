//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, interceptor pipeline)
//!     → request.rs (add request ID)
//!     → handlers (parse operands, validate, compute)
//!     → error.rs (validation failures → 400, faults → 500)
//!     → Send to client
//! ```

pub mod error;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{RequestId, RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
