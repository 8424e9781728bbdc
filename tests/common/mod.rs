//! Shared utilities for integration testing.
//!
//! `MockNode` speaks just enough JSON-RPC to stand in for a chain node:
//! head block, chain id, gas price, balance, nonce and raw transaction
//! submission. Every method call is recorded.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use alloy::primitives::{hex, keccak256, U256};
use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use chainlink_ops::config::{FaucetConfig, NodeConfig, StatusConfig, TimeoutConfig};
use chainlink_ops::faucet::FaucetService;
use chainlink_ops::health::ClusterMonitor;
use chainlink_ops::{HttpServer, Shutdown};

/// Well-known development key (Anvil account #0).
pub const FUNDING_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Checksummed address of `FUNDING_KEY`.
pub const FUNDING_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// URL nothing listens on.
pub const DEAD_URL: &str = "http://127.0.0.1:1";

/// One ether in wei.
pub fn ether(whole: u64) -> U256 {
    U256::from(whole) * U256::from(10u64).pow(U256::from(18u64))
}

#[derive(Debug)]
struct ChainState {
    block_number: u64,
    chain_id: u64,
    gas_price: u128,
    balance: U256,
    nonce: u64,
    calls: Vec<String>,
    raw_transactions: Vec<String>,
}

/// In-process JSON-RPC node.
#[derive(Clone)]
pub struct MockNode {
    addr: SocketAddr,
    state: Arc<Mutex<ChainState>>,
}

impl MockNode {
    /// Start a node at `block_number` holding `balance` for every address.
    pub async fn start(block_number: u64, balance: U256) -> Self {
        let state = Arc::new(Mutex::new(ChainState {
            block_number,
            chain_id: 31337,
            gas_price: 1_000_000_000,
            balance,
            nonce: 0,
            calls: Vec::new(),
            raw_transactions: Vec::new(),
        }));

        let app = Router::new().route("/", post(rpc)).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// JSON-RPC methods received so far, in arrival order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Raw transactions submitted so far, hex encoded.
    pub fn raw_transactions(&self) -> Vec<String> {
        self.state.lock().unwrap().raw_transactions.clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.calls().iter().filter(|m| m.as_str() == method).count()
    }
}

async fn rpc(State(state): State<Arc<Mutex<ChainState>>>, Json(request): Json<Value>) -> Json<Value> {
    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let mut chain = state.lock().unwrap();
    chain.calls.push(method.clone());

    let result = match method.as_str() {
        "eth_blockNumber" => json!(format!("0x{:x}", chain.block_number)),
        "eth_chainId" => json!(format!("0x{:x}", chain.chain_id)),
        "eth_gasPrice" => json!(format!("0x{:x}", chain.gas_price)),
        "eth_getBalance" => json!(format!("0x{:x}", chain.balance)),
        "eth_getTransactionCount" => json!(format!("0x{:x}", chain.nonce)),
        "eth_sendRawTransaction" => {
            let raw = request["params"][0].as_str().unwrap_or_default().to_string();
            let bytes = hex::decode(raw.trim_start_matches("0x")).unwrap_or_default();
            chain.nonce += 1;
            chain.raw_transactions.push(raw);
            json!(keccak256(&bytes).to_string())
        }
        _ => {
            return Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32601, "message": "method not found" },
            }))
        }
    };

    Json(json!({ "jsonrpc": "2.0", "id": id, "result": result }))
}

/// A service under test, stopped when dropped.
pub struct RunningService {
    pub base_url: String,
    shutdown: Shutdown,
}

impl RunningService {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for RunningService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

async fn serve(server: HttpServer) -> RunningService {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    RunningService {
        base_url: format!("http://{}", addr),
        shutdown,
    }
}

/// Start the faucet against `rpc_url`, optionally with the funding key.
pub async fn start_faucet(rpc_url: &str, funded: bool) -> RunningService {
    let config = FaucetConfig {
        rpc_url: rpc_url.to_string(),
        private_key: funded.then(|| FUNDING_KEY.to_string()),
        rpc_timeout_secs: 2,
        ..Default::default()
    };
    let service = Arc::new(FaucetService::new(&config).unwrap());
    serve(HttpServer::faucet(service, &TimeoutConfig::default())).await
}

/// Start the status service over `(name, url)` pairs.
pub async fn start_status(nodes: &[(&str, String)], bft_threshold: usize) -> RunningService {
    let config = StatusConfig {
        nodes: nodes
            .iter()
            .map(|(name, url)| NodeConfig {
                name: name.to_string(),
                rpc_url: url.clone(),
            })
            .collect(),
        bft_threshold,
        probe_timeout_secs: 2,
        ..Default::default()
    };
    let monitor = Arc::new(ClusterMonitor::new(&config).unwrap());
    serve(HttpServer::status(monitor, &TimeoutConfig::default())).await
}
