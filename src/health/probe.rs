//! Node probing.
//!
//! # Responsibilities
//! - Issue the read-only probe RPCs against one node
//! - Convert every failure into an unhealthy record
//!
//! # Design Decisions
//! - One attempt per pass, no retries
//! - Each RPC is bounded by the client's probe timeout
//! - A probe never returns an error to its caller

use std::time::Instant;

use crate::blockchain::{BlockchainClient, BlockchainResult};
use crate::health::node::{BlockReading, NodeStatus};
use crate::observability::metrics;

/// Probe block number, chain id and gas price on one node.
pub async fn probe_node(name: &str, client: &BlockchainClient) -> NodeStatus {
    let start = Instant::now();
    let status = match fetch_status(client).await {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!(node = %name, rpc_url = %client.rpc_url(), error = %e, "Node probe failed");
            NodeStatus::unhealthy(e.to_string())
        }
    };

    metrics::record_node_probe(name, status.healthy, start);
    status
}

async fn fetch_status(client: &BlockchainClient) -> BlockchainResult<NodeStatus> {
    let (block_number, chain_id, gas_price) = tokio::try_join!(
        client.get_block_number(),
        client.get_chain_id(),
        client.get_gas_price(),
    )?;
    Ok(NodeStatus::healthy(block_number, chain_id, gas_price))
}

/// Probe only the head block of one node.
pub async fn probe_block(name: &str, client: &BlockchainClient) -> BlockReading {
    match client.get_block_number().await {
        Ok(block_number) => BlockReading {
            block_number: Some(block_number),
            healthy: true,
            error: None,
        },
        Err(e) => {
            tracing::warn!(node = %name, error = %e, "Block probe failed");
            BlockReading {
                block_number: None,
                healthy: false,
                error: Some(e.to_string()),
            }
        }
    }
}
