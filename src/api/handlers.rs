//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::types::{SeatId, Train};
use crate::Error;

fn error_response(err: Error) -> (StatusCode, String) {
    let status = match &err {
        Error::TrainNotFound(_) => StatusCode::NOT_FOUND,
        Error::SeatConflict { .. } => StatusCode::CONFLICT,
        Error::UnknownSeat { .. } | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Read-only seat map lookup
pub async fn data_for_train(
    State(state): State<AppState>,
    Path(train_id): Path<String>,
) -> Result<Json<Train>, (StatusCode, String)> {
    let train = state
        .backend
        .data_for_train(&train_id)
        .await
        .map_err(error_response)?;
    Ok(Json(train))
}

#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    pub train_id: String,
    pub seats: Vec<SeatId>,
    pub booking_reference: String,
}

/// Reserve seats under a booking reference; returns the updated train
pub async fn reserve(
    State(state): State<AppState>,
    Json(payload): Json<ReserveRequest>,
) -> Result<Json<Train>, (StatusCode, String)> {
    let train = state
        .backend
        .reserve(
            &payload.train_id,
            &payload.seats,
            &payload.booking_reference,
        )
        .await
        .map_err(error_response)?;
    Ok(Json(train))
}

/// Clear every booking on a train; returns the freed train
pub async fn reset(
    State(state): State<AppState>,
    Path(train_id): Path<String>,
) -> Result<Json<Train>, (StatusCode, String)> {
    let train = state
        .backend
        .reset(&train_id)
        .await
        .map_err(error_response)?;
    Ok(Json(train))
}
