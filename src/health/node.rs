//! Per-node and cluster-wide status records.
//!
//! All values here are built fresh for one polling pass and never mutated
//! afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Result of probing one node.
///
/// `block_number` is present iff `healthy`; `error` is present iff not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub healthy: bool,
    pub block_number: Option<u64>,
    pub chain_id: Option<u64>,
    pub gas_price: Option<String>,
    pub error: Option<String>,
}

impl NodeStatus {
    /// A node that answered all probe calls.
    pub fn healthy(block_number: u64, chain_id: u64, gas_price: u128) -> Self {
        Self {
            healthy: true,
            block_number: Some(block_number),
            chain_id: Some(chain_id),
            gas_price: Some(gas_price.to_string()),
            error: None,
        }
    }

    /// A node whose probe failed.
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            healthy: false,
            block_number: None,
            chain_id: None,
            gas_price: None,
            error: Some(error.into()),
        }
    }

    /// Placeholder for a name that is not in the configuration.
    pub fn unknown(name: &str) -> Self {
        Self::unhealthy(format!("Unknown node: {}", name))
    }
}

/// Aggregate over one complete polling pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterStatus {
    pub cluster_healthy: bool,
    pub healthy_count: usize,
    pub total_nodes: usize,
    pub bft_threshold: usize,
    /// Per-node records in configuration order.
    pub nodes: IndexMap<String, NodeStatus>,
    /// Most frequent block number among healthy nodes.
    pub block_consensus: Option<u64>,
    /// Highest minus lowest block number among healthy nodes.
    pub block_spread: Option<u64>,
}

impl ClusterStatus {
    /// Aggregate probe results given in configuration order.
    pub fn aggregate(statuses: Vec<(String, NodeStatus)>, bft_threshold: usize) -> Self {
        let total_nodes = statuses.len();
        let healthy_count = statuses.iter().filter(|(_, s)| s.healthy).count();
        let blocks: Vec<u64> = statuses
            .iter()
            .filter(|(_, s)| s.healthy)
            .filter_map(|(_, s)| s.block_number)
            .collect();

        Self {
            cluster_healthy: healthy_count >= bft_threshold,
            healthy_count,
            total_nodes,
            bft_threshold,
            block_consensus: block_consensus(&blocks),
            block_spread: block_spread(&blocks),
            nodes: statuses.into_iter().collect(),
        }
    }
}

/// Most frequent value; ties go to the value seen first.
pub fn block_consensus(blocks: &[u64]) -> Option<u64> {
    let mut counts: Vec<(u64, usize)> = Vec::new();
    for &block in blocks {
        match counts.iter_mut().find(|(value, _)| *value == block) {
            Some((_, count)) => *count += 1,
            None => counts.push((block, 1)),
        }
    }

    let mut best: Option<(u64, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// `max - min`, or `None` for an empty slice.
pub fn block_spread(blocks: &[u64]) -> Option<u64> {
    let max = blocks.iter().max()?;
    let min = blocks.iter().min()?;
    Some(max - min)
}

/// Block height reported by one node in a block-only pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockReading {
    pub block_number: Option<u64>,
    pub healthy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Block heights across the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    /// Per-node readings in configuration order.
    pub nodes: IndexMap<String, BlockReading>,
    pub max_block: Option<u64>,
    pub min_block: Option<u64>,
    /// `max_block - min_block` with two or more readings, otherwise 0.
    pub spread: u64,
}

impl BlockSummary {
    /// Summarize readings given in configuration order.
    pub fn from_readings(readings: Vec<(String, BlockReading)>) -> Self {
        let blocks: Vec<u64> = readings
            .iter()
            .filter(|(_, r)| r.healthy)
            .filter_map(|(_, r)| r.block_number)
            .collect();

        let spread = if blocks.len() > 1 {
            block_spread(&blocks).unwrap_or(0)
        } else {
            0
        };

        Self {
            max_block: blocks.iter().copied().max(),
            min_block: blocks.iter().copied().min(),
            spread,
            nodes: readings.into_iter().collect(),
        }
    }
}

/// Short summary served at the status service's `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterHealth {
    pub status: String,
    pub cluster_healthy: bool,
    pub healthy_nodes: usize,
    pub total_nodes: usize,
}

impl From<&ClusterStatus> for ClusterHealth {
    fn from(status: &ClusterStatus) -> Self {
        Self {
            status: "ok".to_string(),
            cluster_healthy: status.cluster_healthy,
            healthy_nodes: status.healthy_count,
            total_nodes: status.total_nodes,
        }
    }
}
