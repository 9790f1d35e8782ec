//! Shared utilities for integration testing.

use std::net::SocketAddr;

use calc_service::config::ServiceConfig;
use calc_service::http::HttpServer;
use calc_service::lifecycle::Shutdown;
use calc_service::observability::RequestLogger;

/// A service instance running on an ephemeral port.
pub struct TestService {
    addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestService {
    /// Bind an ephemeral port and serve the real router on it.
    ///
    /// The listener is bound before the serve task is spawned, so requests
    /// sent immediately after return queue in the accept backlog.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let server = HttpServer::new(ServiceConfig::default(), RequestLogger::new());
        let rx = shutdown.subscribe();

        tokio::spawn(async move {
            let _ = server.run(listener, rx).await;
        });

        Self { addr, shutdown }
    }

    /// Absolute URL for a path-and-query on this instance.
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}
