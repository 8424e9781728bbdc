//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and propagated)
//!     → faucet.rs | status.rs (route handlers)
//!     → error.rs (service errors → status code + JSON detail)
//!     → Send to client
//! ```

pub mod error;
pub mod faucet;
pub mod request;
pub mod server;
pub mod status;

pub use error::ApiError;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
