//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Assemble the faucet or status router
//! - Wire up middleware (request ID, tracing, CORS, timeout, metrics)
//! - Serve on a listener until a signal or shutdown broadcast arrives

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::TimeoutConfig;
use crate::faucet::FaucetService;
use crate::health::ClusterMonitor;
use crate::http::request::{request_id, UuidRequestId};
use crate::http::{faucet, status};
use crate::lifecycle::signals::terminate_signal;
use crate::observability::metrics;

/// HTTP server for one of the two services.
pub struct HttpServer {
    name: &'static str,
    router: Router,
}

impl HttpServer {
    /// Faucet service server.
    pub fn faucet(service: Arc<FaucetService>, timeouts: &TimeoutConfig) -> Self {
        Self::build("faucet", faucet::routes(service), timeouts)
    }

    /// Status service server.
    pub fn status(monitor: Arc<ClusterMonitor>, timeouts: &TimeoutConfig) -> Self {
        Self::build("status", status::routes(monitor), timeouts)
    }

    /// Wrap routes with the shared middleware stack.
    #[allow(deprecated)]
    fn build(name: &'static str, routes: Router, timeouts: &TimeoutConfig) -> Self {
        let router = routes
            .route_layer(middleware::from_fn(move |request: Request, next: Next| {
                track_request(name, request, next)
            }))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http().make_span_with(
                        |request: &axum::http::Request<Body>| {
                            tracing::info_span!(
                                "request",
                                method = %request.method(),
                                uri = %request.uri(),
                                request_id = %request_id(request),
                            )
                        },
                    ))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(CorsLayer::very_permissive())
                    .layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs))),
            );

        Self { name, router }
    }

    /// The fully layered router.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(service = self.name, address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = terminate_signal() => {}
                    _ = shutdown.recv() => {}
                }
            })
            .await?;

        tracing::info!(service = self.name, "HTTP server stopped");
        Ok(())
    }
}

async fn track_request(service: &'static str, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    metrics::record_request(service, route, response.status().as_u16(), start);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FaucetConfig;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    fn faucet_router() -> Router {
        let config = FaucetConfig {
            rpc_url: "http://127.0.0.1:1".into(),
            ..Default::default()
        };
        let service = Arc::new(FaucetService::new(&config).unwrap());
        HttpServer::faucet(service, &TimeoutConfig::default()).into_router()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_request_id_added() {
        let response = faucet_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = faucet_router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/drip")
                    .header(header::ORIGIN, "http://explorer.local")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://explorer.local"
        );
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_malformed_drip_address_is_422() {
        let response = faucet_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/drip")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"address":"0x1234"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("Invalid Ethereum address"));
    }

    #[tokio::test]
    async fn test_malformed_balance_address_is_400() {
        let response = faucet_router()
            .oneshot(
                Request::builder()
                    .uri("/balance/not-an-address")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_faucet_info_unconfigured_is_500() {
        let response = faucet_router()
            .oneshot(Request::builder().uri("/faucet-info").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Faucet not configured: missing private key");
    }
}
