//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for both services.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration shared by the faucet and status services.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServicesConfig {
    /// Faucet service settings.
    pub faucet: FaucetConfig,

    /// Status service settings.
    pub status: StatusConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Faucet service configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FaucetConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,

    /// JSON-RPC endpoint of the node transactions are submitted to.
    pub rpc_url: String,

    /// Hex-encoded private key of the funding account.
    #[serde(skip_serializing)]
    pub private_key: Option<String>,

    /// Amount sent per drip, as a decimal in ether.
    pub drip_amount: String,

    /// Chain ID used for EIP-155 signing (31337 for local Anvil).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl FaucetConfig {
    /// The funding key, treating an empty value as unset.
    pub fn funding_key(&self) -> Option<&str> {
        self.private_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            rpc_url: "http://node1:8545".to_string(),
            private_key: None,
            drip_amount: "1.0".to_string(),
            chain_id: 31337,
            rpc_timeout_secs: 10,
        }
    }
}

impl std::fmt::Debug for FaucetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaucetConfig")
            .field("bind_address", &self.bind_address)
            .field("rpc_url", &self.rpc_url)
            .field(
                "private_key",
                &self.funding_key().map(|_| "<redacted>"),
            )
            .field("drip_amount", &self.drip_amount)
            .field("chain_id", &self.chain_id)
            .field("rpc_timeout_secs", &self.rpc_timeout_secs)
            .finish()
    }
}

/// Status service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Bind address (e.g., "0.0.0.0:8001").
    pub bind_address: String,

    /// Monitored nodes, in reporting order.
    pub nodes: Vec<NodeConfig>,

    /// Minimum number of healthy nodes for the cluster to count as healthy.
    pub bft_threshold: usize,

    /// Per-RPC timeout used when probing a node, in seconds.
    pub probe_timeout_secs: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8001".to_string(),
            nodes: ["node1", "node2", "node3"]
                .into_iter()
                .map(|name| NodeConfig {
                    name: name.to_string(),
                    rpc_url: format!("http://{}:8545", name),
                })
                .collect(),
            bft_threshold: 2,
            probe_timeout_secs: 3,
        }
    }
}

/// A monitored blockchain node.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NodeConfig {
    /// Unique node identifier.
    pub name: String,

    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
}

impl NodeConfig {
    /// Environment variable that overrides this node's URL (`node1` → `NODE1_URL`).
    pub fn url_env_var(&self) -> String {
        let name: String = self
            .name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect();
        format!("{}_URL", name)
    }
}

/// Timeout configuration for HTTP handling.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the internal Prometheus exporter.
    pub metrics_enabled: bool,

    /// Internal metrics exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nodes() {
        let config = StatusConfig::default();
        let names: Vec<_> = config.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["node1", "node2", "node3"]);
        assert_eq!(config.nodes[1].rpc_url, "http://node2:8545");
        assert_eq!(config.bft_threshold, 2);
    }

    #[test]
    fn test_url_env_var() {
        let node = NodeConfig {
            name: "eu-west.1".into(),
            rpc_url: "http://x:8545".into(),
        };
        assert_eq!(node.url_env_var(), "EU_WEST_1_URL");
    }

    #[test]
    fn test_private_key_redacted() {
        let config = FaucetConfig {
            private_key: Some("deadbeef".into()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("deadbeef"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_empty_key_is_unset() {
        let config = FaucetConfig {
            private_key: Some("  ".into()),
            ..Default::default()
        };
        assert!(config.funding_key().is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config: ServicesConfig = toml::from_str(
            r#"
            [faucet]
            drip_amount = "0.5"

            [[status.nodes]]
            name = "alpha"
            rpc_url = "http://alpha:8545"
            "#,
        )
        .unwrap();
        assert_eq!(config.faucet.drip_amount, "0.5");
        assert_eq!(config.faucet.chain_id, 31337);
        assert_eq!(config.status.nodes.len(), 1);
        assert_eq!(config.status.probe_timeout_secs, 3);
    }
}
