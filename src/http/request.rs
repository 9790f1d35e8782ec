//! Request identification middleware.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4)
//! - Preserve an ID supplied by the client
//! - Expose the ID to handlers via a request extension
//!
//! # Design Decisions
//! - Request ID added as early as possible so every log line can carry it
//! - Middleware is transparent: the inner service's future is returned as-is

use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request extension holding the correlation ID.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Layer that stamps every request with a correlation ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestIdService<S>
where
    S: Service<Request<Body>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        let id = match request
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
        {
            Some(existing) => existing.to_owned(),
            None => Uuid::new_v4().to_string(),
        };

        if let Ok(value) = HeaderValue::from_str(&id) {
            request.headers_mut().insert(X_REQUEST_ID, value);
        }
        request.extensions_mut().insert(RequestId(id));

        self.inner.call(request)
    }
}
