//! ChainLink cluster operations services.
//!
//! # Architecture Overview
//!
//! ```text
//!   POST /drip   ──▶ http ──▶ faucet::service ──▶ blockchain ──▶ node1
//!                               (check balance, sign, submit)
//!
//!   GET /status  ──▶ http ──▶ health::cluster ─┬─▶ probe ──▶ node1
//!                               (aggregate)    ├─▶ probe ──▶ node2
//!                                              └─▶ probe ──▶ node3
//! ```
//!
//! Both services are stateless: configuration is read once at startup and
//! every request talks to the nodes directly.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use chainlink_ops::config::load_config;
use chainlink_ops::lifecycle::{startup, Shutdown};
use chainlink_ops::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "chainlink-ops", version)]
#[command(about = "Faucet and status services for the ChainLink test cluster", long_about = None)]
struct Cli {
    /// Optional TOML config file; environment variables override it.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    service: Service,
}

#[derive(Subcommand)]
enum Service {
    /// Run the faucet service
    Faucet,
    /// Run the cluster status service
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("chainlink-ops v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    match cli.service {
        Service::Faucet => startup::run_faucet(&config, shutdown.subscribe()).await?,
        Service::Status => startup::run_status(&config, shutdown.subscribe()).await?,
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
