//! Faucet subsystem: drips test currency from a funding account.
//!
//! # Data Flow
//! ```text
//! POST /drip {address}
//!     → address.rs (0x + 40 hex, EIP-55 normalization)
//!     → service.rs (precondition checks, transfer, submission)
//!     → blockchain::transaction (nonce, gas price, signing)
//! ```
//!
//! # Design Decisions
//! - Fire-and-forget: the tx hash is returned once the node accepts the tx
//! - No rate limiting or request history
//! - Submissions from one process are serialized around the nonce read

pub mod address;
pub mod amount;
pub mod error;
pub mod service;

pub use address::{checksum_address, parse_address};
pub use amount::DripAmount;
pub use error::{FaucetError, FaucetResult};
pub use service::FaucetService;
