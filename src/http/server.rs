//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up the interceptor pipeline (request ID, request log, tracing,
//!   timeout, panic catcher)
//! - Bind server to listener and serve with graceful shutdown
//!
//! # Interceptor pipeline (outermost first)
//! ```text
//! catch panic → trace → request ID → timeout → request log → handler
//! ```
//! Validation failures short-circuit inside the handler, before computation;
//! unexpected faults are caught at the outermost layer and mapped to 500.

use std::any::Any;
use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::handlers::{arithmetic, system};
use crate::http::error::ApiError;
use crate::http::request::{RequestId, RequestIdLayer};
use crate::observability::RequestLogger;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub log: RequestLogger,
}

/// HTTP server for the arithmetic service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The request logger is constructed by the caller and injected here;
    /// there is no process-wide logger singleton.
    pub fn new(config: ServiceConfig, log: RequestLogger) -> Self {
        let state = AppState { log };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Self::layered(Self::routes(), config, state)
    }

    /// The route table, without middleware.
    fn routes() -> Router<AppState> {
        Router::new()
            .route("/", get(system::index))
            .route("/health", get(system::health))
            .route("/add", get(arithmetic::add))
            .route("/subtract", get(arithmetic::subtract))
            .route("/multiply", get(arithmetic::multiply))
            .route("/divide", get(arithmetic::divide))
            .route("/exponentiate", get(arithmetic::exponentiate))
            .route("/squareroot", get(arithmetic::square_root))
            .route("/modulo", get(arithmetic::modulo))
            .route("/abs", get(arithmetic::abs))
            .fallback(system::fallback)
    }

    /// Wrap a route table in the interceptor pipeline.
    fn layered(routes: Router<AppState>, config: &ServiceConfig, state: AppState) -> Router {
        let panic_log = state.log.clone();

        routes
            .layer(middleware::from_fn_with_state(state.clone(), log_request))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(
                move |err: Box<dyn Any + Send + 'static>| {
                    panic_log.fault(&panic_detail(err.as_ref()));
                    ApiError::Internal.into_response()
                },
            ))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until either Ctrl+C arrives or the shutdown channel fires,
    /// then finishes in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal(&mut shutdown).await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Interceptor: one info-level record per inbound request, before dispatch.
///
/// The request-ID layer sits outside this one, so the extension is already
/// present by the time the record is emitted.
async fn log_request(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.as_str())
        .unwrap_or("unknown")
        .to_string();
    state
        .log
        .request(&request_id, request.method(), request.uri(), peer);
    next.run(request).await
}

/// Best-effort extraction of a panic payload for the error log.
fn panic_detail(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "request handler panicked".to_string()
    }
}

/// Wait for shutdown: Ctrl+C or an explicit trigger.
async fn shutdown_signal(shutdown: &mut broadcast::Receiver<()>) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown triggered");
        }
    }
}
