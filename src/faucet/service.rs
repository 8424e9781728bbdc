//! Faucet service core logic.
//!
//! # Drip flow
//! ```text
//! validated recipient
//!     → funding key configured?         (500 otherwise)
//!     → node reachable?                 (503 otherwise)
//!     → funding balance >= drip amount? (503 otherwise)
//!     → [submit lock] nonce + gas price → sign → eth_sendRawTransaction
//!     → tx hash returned without waiting for inclusion
//! ```

use alloy::primitives::Address;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::blockchain::{BlockchainClient, BlockchainError, TransferBuilder, Wallet};
use crate::config::FaucetConfig;
use crate::faucet::amount::{display_ether, DripAmount};
use crate::faucet::error::{FaucetError, FaucetResult};
use crate::observability::metrics;

/// Successful drip.
#[derive(Debug, Clone, Serialize)]
pub struct DripReceipt {
    pub success: bool,
    pub tx_hash: String,
    pub amount: String,
    pub recipient: String,
    pub message: String,
}

/// Balance of an arbitrary address.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceView {
    pub address: String,
    pub balance_wei: String,
    pub balance_eth: String,
}

/// Funding account summary.
#[derive(Debug, Clone, Serialize)]
pub struct FundingInfo {
    pub faucet_address: String,
    pub balance_wei: String,
    pub balance_eth: String,
    pub drip_amount: String,
    pub remaining_drips: u64,
}

/// Static service description served at `/`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub drip_amount: String,
    pub chain_id: u64,
    pub usage: &'static str,
}

/// Connectivity report served at `/health`.
#[derive(Debug, Clone, Serialize)]
pub struct FaucetHealth {
    pub status: &'static str,
    pub connected: bool,
    pub block_number: Option<u64>,
    pub rpc_url: String,
}

/// Dispenses test currency from the funding account.
#[derive(Debug)]
pub struct FaucetService {
    client: BlockchainClient,
    wallet: Option<Wallet>,
    drip: DripAmount,
    chain_id: u64,
    /// Held from the nonce read until the node accepts the transaction.
    submit_lock: Mutex<()>,
}

impl FaucetService {
    /// Build the service from validated configuration.
    ///
    /// A missing key is allowed (drips then fail with `NotConfigured`); a
    /// malformed key is a startup error.
    pub fn new(config: &FaucetConfig) -> FaucetResult<Self> {
        let client = BlockchainClient::connect(&config.rpc_url, config.rpc_timeout_secs)
            .map_err(|e| FaucetError::Setup(e.to_string()))?;

        let wallet = config
            .funding_key()
            .map(|key| Wallet::from_private_key(key, config.chain_id))
            .transpose()
            .map_err(|e| FaucetError::Setup(e.to_string()))?;
        if wallet.is_none() {
            tracing::warn!("FAUCET_PRIVATE_KEY not set; drips will be refused");
        }

        let drip = DripAmount::parse(&config.drip_amount).ok_or_else(|| {
            FaucetError::Setup(format!("invalid drip amount '{}'", config.drip_amount))
        })?;

        Ok(Self {
            client,
            wallet,
            drip,
            chain_id: config.chain_id,
            submit_lock: Mutex::new(()),
        })
    }

    /// Static metadata about this faucet.
    pub fn info(&self) -> ServiceInfo {
        ServiceInfo {
            service: "chainlink-faucet",
            drip_amount: format!("{} ETH", self.drip.ether()),
            chain_id: self.chain_id,
            usage: "POST /drip with {'address': '0x...'}",
        }
    }

    /// Send one drip to `recipient`.
    pub async fn drip(&self, recipient: Address) -> FaucetResult<DripReceipt> {
        let result = self.try_drip(recipient).await;
        let outcome = match &result {
            Ok(_) => "sent",
            Err(FaucetError::NotConfigured) => "not_configured",
            Err(FaucetError::NodeUnreachable) => "unreachable",
            Err(FaucetError::Depleted { .. }) => "depleted",
            Err(_) => "failed",
        };
        metrics::record_drip(outcome);
        result
    }

    async fn try_drip(&self, recipient: Address) -> FaucetResult<DripReceipt> {
        let wallet = self.wallet.as_ref().ok_or(FaucetError::NotConfigured)?;

        if !self.client.is_healthy().await {
            tracing::warn!(rpc_url = %self.client.rpc_url(), "Drip refused: node unreachable");
            return Err(FaucetError::NodeUnreachable);
        }

        let balance = self
            .client
            .get_balance(wallet.address())
            .await
            .map_err(failed)?;
        if balance < self.drip.wei() {
            tracing::warn!(balance_wei = %balance, "Drip refused: faucet depleted");
            return Err(FaucetError::Depleted {
                balance: display_ether(balance),
            });
        }

        let builder = TransferBuilder::new(&self.client, wallet);
        let tx_hash = {
            let _guard = self.submit_lock.lock().await;
            let request = builder.build(recipient, self.drip.wei()).await.map_err(failed)?;
            let signed = builder.sign(request).await.map_err(failed)?;
            let tx_hash = self
                .client
                .send_raw_transaction(&signed.encoded)
                .await
                .map_err(failed)?;
            tracing::debug!(nonce = signed.nonce, local_hash = %signed.hash, "Transfer submitted");
            tx_hash
        };

        let recipient = recipient.to_checksum(None);
        let amount = format!("{} ETH", self.drip.ether());
        tracing::info!(recipient = %recipient, tx_hash = %tx_hash, amount = %amount, "Drip sent");

        Ok(DripReceipt {
            success: true,
            tx_hash: tx_hash.to_string(),
            message: format!("Sent {} to {}", amount, recipient),
            amount,
            recipient,
        })
    }

    /// Balance of any address.
    pub async fn balance(&self, address: Address) -> FaucetResult<BalanceView> {
        let balance = self.client.get_balance(address).await?;
        Ok(BalanceView {
            address: address.to_checksum(None),
            balance_wei: balance.to_string(),
            balance_eth: display_ether(balance),
        })
    }

    /// Funding account address, balance and remaining drips.
    pub async fn funding_info(&self) -> FaucetResult<FundingInfo> {
        let wallet = self.wallet.as_ref().ok_or(FaucetError::NotConfigured)?;
        let balance = self.client.get_balance(wallet.address()).await?;

        Ok(FundingInfo {
            faucet_address: wallet.address().to_checksum(None),
            balance_wei: balance.to_string(),
            balance_eth: display_ether(balance),
            drip_amount: format!("{} ETH", self.drip.ether()),
            remaining_drips: self.drip.remaining_drips(balance),
        })
    }

    /// Whether the configured node answers, with its head block.
    pub async fn health(&self) -> FaucetHealth {
        let block_number = self.client.get_block_number().await.ok();
        let connected = block_number.is_some();
        FaucetHealth {
            status: if connected { "ok" } else { "degraded" },
            connected,
            block_number,
            rpc_url: self.client.rpc_url().to_string(),
        }
    }
}

fn failed(err: BlockchainError) -> FaucetError {
    FaucetError::TransactionFailed(err.to_string())
}
