//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::config::schema::ServicesConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { var: String, value: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, value } => {
                write!(f, "Invalid value for {}: '{}'", var, value)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration: optional TOML file, then process environment, then validation.
pub fn load_config(path: Option<&Path>) -> Result<ServicesConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => ServicesConfig::default(),
    };

    let config = apply_env_overrides(config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment values onto a config.
///
/// `lookup` abstracts the environment so overrides can be exercised without
/// touching process state.
pub fn apply_env_overrides<F>(mut config: ServicesConfig, lookup: F) -> Result<ServicesConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("RPC_URL") {
        config.faucet.rpc_url = url;
    }
    if let Some(key) = lookup("FAUCET_PRIVATE_KEY") {
        config.faucet.private_key = Some(key);
    }
    if let Some(amount) = lookup("DRIP_AMOUNT") {
        config.faucet.drip_amount = amount;
    }
    if let Some(chain_id) = lookup("CHAIN_ID") {
        config.faucet.chain_id = parse_var("CHAIN_ID", chain_id)?;
    }
    if let Some(addr) = lookup("FAUCET_BIND_ADDRESS") {
        config.faucet.bind_address = addr;
    }
    if let Some(addr) = lookup("STATUS_BIND_ADDRESS") {
        config.status.bind_address = addr;
    }
    if let Some(threshold) = lookup("BFT_THRESHOLD") {
        config.status.bft_threshold = parse_var("BFT_THRESHOLD", threshold)?;
    }
    for node in &mut config.status.nodes {
        if let Some(url) = lookup(&node.url_env_var()) {
            node.rpc_url = url;
        }
    }

    Ok(config)
}

fn parse_var<T: FromStr>(var: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        var: var.to_string(),
        value,
    })
}
