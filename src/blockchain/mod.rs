//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Configuration (RPC URL, funding key, chain id)
//!     → client.rs (RPC connection with timeouts)
//!     → wallet.rs (key loading, signer)
//!     → transaction.rs (build, sign, encode for broadcast)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts
//! - Graceful degradation when a node is unreachable

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use transaction::{SignedTransfer, TransferBuilder, TRANSFER_GAS_LIMIT};
pub use types::{BlockchainError, BlockchainResult};
pub use wallet::Wallet;
