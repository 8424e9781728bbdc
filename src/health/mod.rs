//! Cluster health subsystem (status service).
//!
//! # Data Flow
//! ```text
//! request
//!     → cluster.rs (fan out one probe per configured node, join all)
//!     → probe.rs (block number, chain id, gas price under a timeout)
//!     → node.rs (NodeStatus per node → ClusterStatus aggregate)
//!     → exposition.rs (Prometheus text, for /metrics)
//! ```
//!
//! # Design Decisions
//! - Nothing is cached: every request triggers a fresh pass
//! - A failing node becomes `healthy: false`, never a request error
//! - The cluster is healthy when at least `bft_threshold` nodes are
//! - Block consensus ties go to the value seen first in configuration order

pub mod cluster;
pub mod exposition;
pub mod node;
pub mod probe;

pub use cluster::ClusterMonitor;
pub use node::{BlockReading, BlockSummary, ClusterHealth, ClusterStatus, NodeStatus};
