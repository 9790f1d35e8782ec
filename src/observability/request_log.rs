//! The injected request-logger collaborator.
//!
//! One instance is constructed at startup and cloned into the router state;
//! handlers and interceptors call it explicitly instead of reaching for a
//! process-wide singleton. Every record carries the constant service tag.
//! Emission is fire-and-forget and never influences the HTTP response.

use std::net::SocketAddr;

use axum::http::{Method, Uri};

use crate::config::SERVICE_NAME;
use crate::ops::Operation;

/// Structured logger for request-lifecycle events.
#[derive(Debug, Clone)]
pub struct RequestLogger {
    service: &'static str,
}

impl RequestLogger {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME,
        }
    }

    /// One info-level record per inbound request, before dispatch.
    pub fn request(&self, request_id: &str, method: &Method, uri: &Uri, peer: SocketAddr) {
        tracing::info!(
            service = self.service,
            request_id = %request_id,
            "Received {method} request for {uri} from {peer}"
        );
    }

    /// One error-level record per validation rejection.
    pub fn invalid_input(&self, operation: Operation) {
        tracing::error!(service = self.service, "{}", operation.rejection_message());
    }

    /// One error-level record per unexpected internal fault.
    pub fn fault(&self, detail: &str) {
        tracing::error!(service = self.service, "{detail}");
    }
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self::new()
    }
}
