//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the service from validated configuration
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last (traffic only when ready)

use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::blockchain::BlockchainError;
use crate::config::ServicesConfig;
use crate::faucet::{FaucetError, FaucetService};
use crate::health::ClusterMonitor;
use crate::http::HttpServer;

/// Errors that abort service startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("faucet setup failed: {0}")]
    Faucet(#[from] FaucetError),

    #[error("monitor setup failed: {0}")]
    Monitor(#[from] BlockchainError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the faucet service until shutdown.
pub async fn run_faucet(
    config: &ServicesConfig,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    let service = Arc::new(FaucetService::new(&config.faucet)?);

    tracing::info!(
        rpc_url = %config.faucet.rpc_url,
        chain_id = config.faucet.chain_id,
        drip_amount = %config.faucet.drip_amount,
        "Faucet configured"
    );

    let listener = bind(&config.faucet.bind_address).await?;
    HttpServer::faucet(service, &config.timeouts)
        .run(listener, shutdown)
        .await?;
    Ok(())
}

/// Run the status service until shutdown.
pub async fn run_status(
    config: &ServicesConfig,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    let monitor = Arc::new(ClusterMonitor::new(&config.status)?);

    for node in &config.status.nodes {
        tracing::info!(node = %node.name, rpc_url = %node.rpc_url, "Monitoring node");
    }

    let listener = bind(&config.status.bind_address).await?;
    HttpServer::status(monitor, &config.timeouts)
        .run(listener, shutdown)
        .await?;
    Ok(())
}

async fn bind(address: &str) -> Result<TcpListener, StartupError> {
    TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.to_string(),
            source,
        })
}
