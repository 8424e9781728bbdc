//! Operational services for a private blockchain test cluster: a faucet that
//! drips test currency and a status monitor that aggregates node health.

pub mod blockchain;
pub mod config;
pub mod faucet;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServicesConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
