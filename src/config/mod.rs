//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (RPC_URL, FAUCET_PRIVATE_KEY, NODE1_URL, ...)
//!     → validation.rs (semantic checks)
//!     → ServicesConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All fields have defaults to allow running with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    FaucetConfig, LogFormat, NodeConfig, ObservabilityConfig, ServicesConfig, StatusConfig,
    TimeoutConfig,
};
pub use validation::ValidationError;
