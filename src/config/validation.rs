//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Node names unique and URLs usable
//! - Validate value ranges (timeouts > 0, threshold within node count)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServicesConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServicesConfig;
use crate::faucet::DripAmount;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no nodes configured")]
    NoNodes,

    #[error("node name must not be empty")]
    EmptyNodeName,

    #[error("duplicate node name '{0}'")]
    DuplicateNode(String),

    #[error("invalid URL for {field}: '{url}'")]
    InvalidUrl { field: String, url: String },

    #[error("bft_threshold {threshold} must be between 1 and {nodes}")]
    ThresholdOutOfRange { threshold: usize, nodes: usize },

    #[error("drip_amount '{0}' must be a positive ether amount")]
    InvalidDripAmount(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("invalid bind address for {field}: '{address}'")]
    InvalidBindAddress { field: &'static str, address: String },
}

/// Validate a loaded configuration, collecting every problem found.
pub fn validate_config(config: &ServicesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let status = &config.status;
    if status.nodes.is_empty() {
        errors.push(ValidationError::NoNodes);
    }

    let mut seen = HashSet::new();
    for node in &status.nodes {
        if node.name.trim().is_empty() {
            errors.push(ValidationError::EmptyNodeName);
        } else if !seen.insert(node.name.as_str()) {
            errors.push(ValidationError::DuplicateNode(node.name.clone()));
        }
        if !is_http_url(&node.rpc_url) {
            errors.push(ValidationError::InvalidUrl {
                field: format!("node '{}'", node.name),
                url: node.rpc_url.clone(),
            });
        }
    }

    if status.bft_threshold == 0 || status.bft_threshold > status.nodes.len() {
        errors.push(ValidationError::ThresholdOutOfRange {
            threshold: status.bft_threshold,
            nodes: status.nodes.len(),
        });
    }

    let faucet = &config.faucet;
    if !is_http_url(&faucet.rpc_url) {
        errors.push(ValidationError::InvalidUrl {
            field: "faucet.rpc_url".to_string(),
            url: faucet.rpc_url.clone(),
        });
    }

    if DripAmount::parse(&faucet.drip_amount).is_none() {
        errors.push(ValidationError::InvalidDripAmount(faucet.drip_amount.clone()));
    }

    if faucet.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("faucet.rpc_timeout_secs"));
    }
    if status.probe_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("status.probe_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    for (field, address) in [
        ("faucet.bind_address", &faucet.bind_address),
        ("status.bind_address", &status.bind_address),
    ] {
        if address.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::InvalidBindAddress {
                field,
                address: address.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(raw: &str) -> bool {
    url::Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::NodeConfig;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_config(&ServicesConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServicesConfig::default();
        config.status.nodes.push(NodeConfig {
            name: "node1".into(),
            rpc_url: "not a url".into(),
        });
        config.faucet.drip_amount = "0".into();
        config.status.probe_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateNode("node1".into())));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidUrl { .. })));
        assert!(errors.contains(&ValidationError::InvalidDripAmount("0".into())));
        assert!(errors.contains(&ValidationError::ZeroTimeout("status.probe_timeout_secs")));
    }

    #[test]
    fn test_threshold_bounds() {
        let mut config = ServicesConfig::default();
        config.status.bft_threshold = 4;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::ThresholdOutOfRange { threshold: 4, nodes: 3 }]
        );

        config.status.bft_threshold = 3;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = ServicesConfig::default();
        config.faucet.rpc_url = "ws://node1:8546".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_fractional_drip_amount() {
        let mut config = ServicesConfig::default();
        config.faucet.drip_amount = "0.25".into();
        assert!(validate_config(&config).is_ok());

        config.faucet.drip_amount = "lots".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_negative_drip_amount_rejected() {
        let mut config = ServicesConfig::default();
        config.faucet.drip_amount = "-1".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidDripAmount("-1".into())]);
    }
}
