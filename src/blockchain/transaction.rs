//! Transfer building and signing.
//!
//! # Responsibilities
//! - Build native value transfers from chain state (nonce, gas price)
//! - Sign them locally with the funding wallet
//! - Produce the EIP-2718 bytes handed to `eth_sendRawTransaction`

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash, U256};
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::blockchain::wallet::Wallet;

/// Gas used by a plain value transfer.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// A signed transfer ready for submission.
#[derive(Debug, Clone)]
pub struct SignedTransfer {
    /// Hash computed locally from the signed envelope.
    pub hash: TxHash,
    /// EIP-2718 encoded transaction.
    pub encoded: Vec<u8>,
    /// Nonce the transaction was signed with.
    pub nonce: u64,
}

/// Builds signed value transfers from the funding wallet.
pub struct TransferBuilder<'a> {
    client: &'a BlockchainClient,
    wallet: &'a Wallet,
}

impl<'a> TransferBuilder<'a> {
    /// Create a new transfer builder.
    pub fn new(client: &'a BlockchainClient, wallet: &'a Wallet) -> Self {
        Self { client, wallet }
    }

    /// Build a legacy transfer request using the node's nonce and gas price.
    pub async fn build(&self, to: Address, value: U256) -> BlockchainResult<TransactionRequest> {
        let nonce = self.client.get_transaction_count(self.wallet.address()).await?;
        let gas_price = self.client.get_gas_price().await?;

        Ok(transfer_request(self.wallet, to, value, nonce, gas_price))
    }

    /// Sign a built request with the funding wallet.
    pub async fn sign(&self, tx: TransactionRequest) -> BlockchainResult<SignedTransfer> {
        sign_transfer(self.wallet, tx).await
    }
}

/// Assemble the transfer request from already-known chain state.
pub fn transfer_request(
    wallet: &Wallet,
    to: Address,
    value: U256,
    nonce: u64,
    gas_price: u128,
) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(wallet.address())
        .with_to(to)
        .with_value(value)
        .with_nonce(nonce)
        .with_gas_price(gas_price)
        .with_gas_limit(TRANSFER_GAS_LIMIT)
        .with_chain_id(wallet.chain_id())
}

/// Sign `tx` locally, returning the encoded envelope and its hash.
pub async fn sign_transfer(wallet: &Wallet, tx: TransactionRequest) -> BlockchainResult<SignedTransfer> {
    let nonce = tx
        .nonce
        .ok_or_else(|| BlockchainError::Signing("nonce not set".to_string()))?;

    let envelope = tx
        .build(&wallet.network_wallet())
        .await
        .map_err(|e| BlockchainError::Signing(e.to_string()))?;

    Ok(SignedTransfer {
        hash: *envelope.tx_hash(),
        encoded: envelope.encoded_2718(),
        nonce,
    })
}
