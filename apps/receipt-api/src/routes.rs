//! HTTP routes for the Receipt API.
//!
//! Provides REST endpoints for:
//! - Processing a receipt
//! - Looking up a receipt's points
//! - Health check

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use receipt_core::Receipt;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::services::health_service::HealthResponse;
use crate::AppState;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Response after processing a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessResponse {
    pub id: String,
}

/// Points awarded to a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    #[ts(type = "number")]
    pub points: u64,
}

// =============================================================================
// Router
// =============================================================================

/// Create the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health_handler))
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/:id/points", get(get_points_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(state.health.check())
}

/// Accept a receipt and return its new id.
///
/// Any body that fails to deserialize is reported the same way as a receipt
/// that fails validation.
async fn process_receipt_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(receipt) = payload.map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;

    let id = state.receipts.process(receipt)?;
    Ok(Json(ProcessResponse { id }))
}

/// Look up the points for a processed receipt.
async fn get_points_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.receipts.points(&id)?;
    Ok(Json(PointsResponse { points }))
}
