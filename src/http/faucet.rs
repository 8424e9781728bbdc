//! Faucet service HTTP handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::faucet::service::{BalanceView, DripReceipt, FaucetHealth, FundingInfo, ServiceInfo};
use crate::faucet::{parse_address, FaucetService};
use crate::http::error::ApiError;

/// Body of `POST /drip`.
#[derive(Debug, Deserialize)]
pub struct DripRequest {
    pub address: String,
}

/// Faucet routes.
pub fn routes(service: Arc<FaucetService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/drip", post(drip))
        .route("/balance/{address}", get(balance))
        .route("/faucet-info", get(faucet_info))
        .route("/health", get(health))
        .with_state(service)
}

async fn root(State(service): State<Arc<FaucetService>>) -> Json<ServiceInfo> {
    Json(service.info())
}

async fn drip(
    State(service): State<Arc<FaucetService>>,
    body: Result<Json<DripRequest>, JsonRejection>,
) -> Result<Json<DripReceipt>, ApiError> {
    let Json(request) =
        body.map_err(|rejection| ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()))?;
    let recipient = parse_address(&request.address).map_err(ApiError::validation)?;
    Ok(Json(service.drip(recipient).await?))
}

async fn balance(
    State(service): State<Arc<FaucetService>>,
    Path(address): Path<String>,
) -> Result<Json<BalanceView>, ApiError> {
    let address = parse_address(&address)?;
    Ok(Json(service.balance(address).await?))
}

async fn faucet_info(State(service): State<Arc<FaucetService>>) -> Result<Json<FundingInfo>, ApiError> {
    Ok(Json(service.funding_info().await?))
}

async fn health(State(service): State<Arc<FaucetService>>) -> Json<FaucetHealth> {
    Json(service.health().await)
}
