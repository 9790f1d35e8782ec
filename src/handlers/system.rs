//! Root welcome, health check, and fallback handlers.

use axum::http::{StatusCode, Uri};
use axum::Json;
use serde::Serialize;

/// Fixed welcome banner listing the available endpoints.
pub const WELCOME: &str = "Welcome to the Advanced Arithmetic Operations API. \
    Use /add, /subtract, /multiply, /divide, /exponentiate, /squareroot, \
    /modulo, /abs endpoints to perform arithmetic operations.";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint. Always healthy while the process serves.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Root path handling.
pub async fn index() -> &'static str {
    WELCOME
}

/// Fallback for unmatched paths.
pub async fn fallback(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("Cannot GET {}", uri.path()))
}
