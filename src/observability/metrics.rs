//! Internal service metrics.
//!
//! # Metrics
//! - `chainlink_ops_http_requests_total` (counter): requests by service, route, status
//! - `chainlink_ops_http_request_duration_seconds` (histogram): handler latency
//! - `chainlink_ops_probe_duration_seconds` (histogram): per-node probe latency
//! - `chainlink_ops_node_up` (gauge): last probe outcome per node
//! - `chainlink_ops_cluster_healthy_nodes` (gauge): healthy nodes in the last pass
//! - `chainlink_ops_cluster_healthy` (gauge): 1 when the last pass met the threshold
//! - `chainlink_ops_drips_total` (counter): drip attempts by outcome
//!
//! These describe the services themselves and are exported on a separate
//! listener. The cluster gauges served at the status service's `/metrics`
//! are rendered per request by `health::exposition`.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled HTTP request.
pub fn record_request(service: &'static str, route: String, status: u16, start: Instant) {
    ::metrics::counter!(
        "chainlink_ops_http_requests_total",
        "service" => service,
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!(
        "chainlink_ops_http_request_duration_seconds",
        "service" => service,
        "route" => route
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the outcome of one node probe.
pub fn record_node_probe(node: &str, healthy: bool, start: Instant) {
    ::metrics::histogram!("chainlink_ops_probe_duration_seconds", "node" => node.to_string())
        .record(start.elapsed().as_secs_f64());
    ::metrics::gauge!("chainlink_ops_node_up", "node" => node.to_string())
        .set(if healthy { 1.0 } else { 0.0 });
}

/// Record the aggregate of one full pass.
pub fn record_cluster(healthy_nodes: usize, cluster_healthy: bool) {
    ::metrics::gauge!("chainlink_ops_cluster_healthy_nodes").set(healthy_nodes as f64);
    ::metrics::gauge!("chainlink_ops_cluster_healthy").set(if cluster_healthy { 1.0 } else { 0.0 });
}

/// Record one drip attempt.
pub fn record_drip(outcome: &'static str) {
    ::metrics::counter!("chainlink_ops_drips_total", "outcome" => outcome).increment(1);
}
