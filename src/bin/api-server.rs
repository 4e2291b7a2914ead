//! Market Analyst API Server
//!
//! HTTP API exposing the analysis engine, health check and metrics.
//! Stateless; every request is analysed independently.

use dotenvy::dotenv;
use market_analyst::config::{get_environment, ServiceConfig};
use market_analyst::core::http::start_server;
use market_analyst::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = ServiceConfig::from_env();
    let env = get_environment();
    info!("Starting Market Analyst API Server");
    info!(environment = %env, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        result = start_server(config) => {
            if let Err(e) = result {
                error!(error = %e, "HTTP server error");
                return Err(e);
            }
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
