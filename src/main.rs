//! Service binary: CLI parsing, config load, logging init, serve.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use calc_service::config::{self, ServiceConfig};
use calc_service::http::HttpServer;
use calc_service::lifecycle::Shutdown;
use calc_service::observability::{logging, RequestLogger};

#[derive(Parser)]
#[command(name = "calc-service")]
#[command(about = "HTTP service exposing arithmetic operations", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener port from the configuration.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(port) = cli.port {
        config.listener.override_port(port);
    }

    logging::init(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, RequestLogger::new());
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
