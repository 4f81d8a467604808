use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use boxoffice_core::{Hold, HoldId};
use boxoffice_shared::Masked;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::reservations::ReservationResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateHoldRequest {
    /// Kept wide so negative or oversized counts reach the engine as bad input.
    #[serde(default)]
    pub num_seats: Option<i64>,
    #[serde(default)]
    pub customer_email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    #[serde(default)]
    pub customer_email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HoldResponse {
    pub hold_id: HoldId,
    /// Masked form only; ids are sequential and easy to enumerate.
    pub customer_email: String,
    pub start_seat: usize,
    pub seat_count: usize,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl HoldResponse {
    fn from_hold(hold: Hold, max_hold: Duration) -> Self {
        Self {
            hold_id: hold.id,
            expires_at: hold.expires_at(max_hold),
            customer_email: Masked::new(&hold.customer_email).to_string(),
            start_seat: hold.start_seat,
            seat_count: hold.seat_count,
            created_at: hold.created_at,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/holds", post(create_hold))
        .route("/v1/holds/{id}", get(get_hold))
        .route("/v1/holds/{id}/reservation", post(reserve_hold))
}

/// POST /v1/holds
/// Find and hold the first block of consecutive seats
async fn create_hold(
    State(state): State<AppState>,
    body: Result<Json<CreateHoldRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<HoldResponse>), AppError> {
    let Json(req) = body.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let email = req.customer_email.unwrap_or_default();
    // Anything outside 1..=u32::MAX is rejected by the engine as an invalid count
    let count = req
        .num_seats
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0);
    let hold = state.engine.try_find_and_hold_seats(count, &email)?;

    let response = HoldResponse::from_hold(hold, state.engine.max_hold());
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /v1/holds/{id}
/// Raw hold record, no expiry handling
async fn get_hold(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<HoldResponse>, AppError> {
    let hold = state
        .engine
        .hold(HoldId(id))
        .ok_or_else(|| AppError::NotFoundError(format!("Hold not found: {}", id)))?;

    Ok(Json(HoldResponse::from_hold(hold, state.engine.max_hold())))
}

/// POST /v1/holds/{id}/reservation
/// Commit a live hold
async fn reserve_hold(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<ReserveRequest>, JsonRejection>,
) -> Result<Json<ReservationResponse>, AppError> {
    let Json(req) = body.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let email = req.customer_email.unwrap_or_default();
    let reservation = state.engine.try_reserve_seats(HoldId(id), &email)?;

    Ok(Json(ReservationResponse::from(reservation)))
}
