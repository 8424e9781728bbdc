//! Prometheus text rendering of a polling pass.
//!
//! Every scrape reflects exactly one fresh pass. Block gauges for unhealthy
//! nodes are omitted, never left at a stale value.

use std::fmt::Write;

use crate::health::node::{ClusterStatus, NodeStatus};

/// Render per-node and cluster gauges.
///
/// `statuses` must be in configuration order; lines follow that order.
/// Each metric family is written as one contiguous group.
pub fn render_metrics(statuses: &[(String, NodeStatus)], bft_threshold: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_metrics(&mut out, statuses, bft_threshold);
    out
}

fn write_metrics(
    out: &mut String,
    statuses: &[(String, NodeStatus)],
    bft_threshold: usize,
) -> std::fmt::Result {
    writeln!(out, "# HELP chainlink_node_healthy Node health status (1=healthy, 0=unhealthy)")?;
    writeln!(out, "# TYPE chainlink_node_healthy gauge")?;
    for (name, status) in statuses {
        writeln!(
            out,
            "chainlink_node_healthy{{node=\"{}\"}} {}",
            escape_label(name),
            u8::from(status.healthy)
        )?;
    }

    writeln!(out, "# HELP chainlink_node_block_number Current block number")?;
    writeln!(out, "# TYPE chainlink_node_block_number gauge")?;
    for (name, status) in statuses {
        if let Some(block) = status.block_number {
            writeln!(out, "chainlink_node_block_number{{node=\"{}\"}} {}", escape_label(name), block)?;
        }
    }

    let cluster = ClusterStatus::aggregate(statuses.to_vec(), bft_threshold);

    writeln!(out, "# HELP chainlink_cluster_healthy Cluster health status (1=healthy, 0=unhealthy)")?;
    writeln!(out, "# TYPE chainlink_cluster_healthy gauge")?;
    writeln!(out, "chainlink_cluster_healthy {}", u8::from(cluster.cluster_healthy))?;
    writeln!(out, "# HELP chainlink_healthy_nodes Number of healthy nodes")?;
    writeln!(out, "# TYPE chainlink_healthy_nodes gauge")?;
    writeln!(out, "chainlink_healthy_nodes {}", cluster.healthy_count)
}

fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
