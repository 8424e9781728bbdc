//! Error types for the faucet service.

use thiserror::Error;

use crate::blockchain::BlockchainError;

/// Faucet service errors.
#[derive(Debug, Error)]
pub enum FaucetError {
    /// No funding key was configured.
    #[error("Faucet not configured: missing private key")]
    NotConfigured,

    /// The configured node did not answer.
    #[error("Cannot connect to blockchain node")]
    NodeUnreachable,

    /// Address input did not match `0x` + 40 hex characters.
    #[error("{0}")]
    InvalidAddress(String),

    /// Funding balance is below one drip.
    #[error("Faucet depleted. Balance: {balance} ETH")]
    Depleted { balance: String },

    /// Any failure while preparing, signing or submitting a drip.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Configuration could not be turned into a working service.
    #[error("Faucet setup failed: {0}")]
    Setup(String),

    /// A read-only query against the node failed.
    #[error("Blockchain query failed: {0}")]
    Query(#[from] BlockchainError),
}

pub type FaucetResult<T> = Result<T, FaucetError>;
