//! Status service HTTP handlers.
//!
//! None of these handlers fail because of a node: probe failures are part
//! of the response body.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::health::{BlockSummary, ClusterHealth, ClusterMonitor, ClusterStatus, NodeStatus};

/// Content type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Status routes.
pub fn routes(monitor: Arc<ClusterMonitor>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/status", get(cluster_status))
        .route("/node/{name}", get(node_status))
        .route("/health", get(health))
        .route("/blocks", get(blocks))
        .route("/metrics", get(metrics))
        .with_state(monitor)
}

async fn root(State(monitor): State<Arc<ClusterMonitor>>) -> Json<Value> {
    Json(json!({
        "service": "chainlink-status",
        "nodes_monitored": monitor.node_names(),
        "bft_threshold": monitor.bft_threshold(),
        "endpoints": {
            "status": "/status",
            "health": "/health",
            "node": "/node/{node_name}",
            "blocks": "/blocks",
            "metrics": "/metrics",
        },
    }))
}

async fn cluster_status(State(monitor): State<Arc<ClusterMonitor>>) -> Json<ClusterStatus> {
    Json(monitor.cluster_status().await)
}

async fn node_status(
    State(monitor): State<Arc<ClusterMonitor>>,
    Path(name): Path<String>,
) -> Json<NodeStatus> {
    Json(monitor.node_status(&name).await)
}

async fn health(State(monitor): State<Arc<ClusterMonitor>>) -> Json<ClusterHealth> {
    Json(monitor.cluster_health().await)
}

async fn blocks(State(monitor): State<Arc<ClusterMonitor>>) -> Json<BlockSummary> {
    Json(monitor.block_summary().await)
}

async fn metrics(State(monitor): State<Arc<ClusterMonitor>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        monitor.metrics_text().await,
    )
}
