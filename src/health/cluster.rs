//! Cluster monitor: fans probes out over every configured node.
//!
//! # Responsibilities
//! - Hold one RPC client per configured node
//! - Probe all nodes concurrently and join before aggregating
//! - Serve the read views (full status, single node, blocks, metrics text)

use futures_util::future::join_all;

use crate::blockchain::{BlockchainClient, BlockchainResult};
use crate::config::StatusConfig;
use crate::health::exposition::render_metrics;
use crate::health::node::{BlockSummary, ClusterHealth, ClusterStatus, NodeStatus};
use crate::health::probe::{probe_block, probe_node};
use crate::observability::metrics;

/// A configured node and its RPC client.
#[derive(Debug, Clone)]
pub struct MonitoredNode {
    pub name: String,
    pub client: BlockchainClient,
}

/// Polls a fixed set of nodes on demand.
#[derive(Debug, Clone)]
pub struct ClusterMonitor {
    nodes: Vec<MonitoredNode>,
    bft_threshold: usize,
}

impl ClusterMonitor {
    /// Build clients for every configured node.
    pub fn new(config: &StatusConfig) -> BlockchainResult<Self> {
        let nodes = config
            .nodes
            .iter()
            .map(|node| {
                Ok(MonitoredNode {
                    name: node.name.clone(),
                    client: BlockchainClient::connect(&node.rpc_url, config.probe_timeout_secs)?,
                })
            })
            .collect::<BlockchainResult<Vec<_>>>()?;

        tracing::info!(
            nodes = nodes.len(),
            bft_threshold = config.bft_threshold,
            "Cluster monitor initialized"
        );

        Ok(Self {
            nodes,
            bft_threshold: config.bft_threshold,
        })
    }

    /// Configured node names, in order.
    pub fn node_names(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name.as_str()).collect()
    }

    pub fn bft_threshold(&self) -> usize {
        self.bft_threshold
    }

    /// Probe every node once; results keep configuration order.
    pub async fn poll(&self) -> Vec<(String, NodeStatus)> {
        let probes = self.nodes.iter().map(|node| async move {
            (node.name.clone(), probe_node(&node.name, &node.client).await)
        });
        join_all(probes).await
    }

    /// Full aggregate over a fresh pass.
    pub async fn cluster_status(&self) -> ClusterStatus {
        let status = ClusterStatus::aggregate(self.poll().await, self.bft_threshold);
        metrics::record_cluster(status.healthy_count, status.cluster_healthy);
        if !status.cluster_healthy {
            tracing::warn!(
                healthy = status.healthy_count,
                threshold = self.bft_threshold,
                "Cluster below health threshold"
            );
        }
        status
    }

    /// Short health summary over a fresh pass.
    pub async fn cluster_health(&self) -> ClusterHealth {
        ClusterHealth::from(&self.cluster_status().await)
    }

    /// Probe a single node by name; unknown names yield an unhealthy record.
    pub async fn node_status(&self, name: &str) -> NodeStatus {
        match self.nodes.iter().find(|n| n.name == name) {
            Some(node) => probe_node(&node.name, &node.client).await,
            None => NodeStatus::unknown(name),
        }
    }

    /// Block heights only, over a fresh pass.
    pub async fn block_summary(&self) -> BlockSummary {
        let probes = self.nodes.iter().map(|node| async move {
            (node.name.clone(), probe_block(&node.name, &node.client).await)
        });
        BlockSummary::from_readings(join_all(probes).await)
    }

    /// Prometheus text over a fresh pass.
    pub async fn metrics_text(&self) -> String {
        let statuses = self.poll().await;
        render_metrics(&statuses, self.bft_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NodeConfig;

    fn dead_cluster() -> StatusConfig {
        StatusConfig {
            nodes: (1..=3)
                .map(|i| NodeConfig {
                    name: format!("node{}", i),
                    rpc_url: "http://127.0.0.1:1".to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_all_nodes_down() {
        let monitor = ClusterMonitor::new(&dead_cluster()).unwrap();
        assert_eq!(monitor.node_names(), ["node1", "node2", "node3"]);

        let status = monitor.cluster_status().await;
        assert_eq!(status.total_nodes, 3);
        assert_eq!(status.healthy_count, 0);
        assert!(!status.cluster_healthy);
        assert!(status.nodes.values().all(|n| n.error.is_some()));
        assert_eq!(status.block_consensus, None);
    }

    #[tokio::test]
    async fn test_unknown_node_name() {
        let monitor = ClusterMonitor::new(&dead_cluster()).unwrap();
        let status = monitor.node_status("node7").await;
        assert!(!status.healthy);
        assert_eq!(status.error.as_deref(), Some("Unknown node: node7"));
    }

    #[test]
    fn test_invalid_node_url() {
        let mut config = dead_cluster();
        config.nodes[1].rpc_url = "::".into();
        assert!(ClusterMonitor::new(&config).is_err());
    }
}
