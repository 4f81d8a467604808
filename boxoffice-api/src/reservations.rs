use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use boxoffice_core::{HoldId, Reservation};
use boxoffice_shared::Masked;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub confirmation_code: String,
    pub reservation_id: HoldId,
    /// Masked form only
    pub customer_email: String,
    pub start_seat: usize,
    pub seat_count: usize,
    pub reserved_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            confirmation_code: reservation.confirmation_code(),
            reservation_id: reservation.id,
            customer_email: Masked::new(&reservation.customer_email).to_string(),
            start_seat: reservation.start_seat,
            seat_count: reservation.seat_count,
            reserved_at: reservation.reserved_at,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/reservations/{id}", get(get_reservation))
}

/// GET /v1/reservations/{id}
async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ReservationResponse>, AppError> {
    let reservation = state
        .engine
        .reservation(HoldId(id))
        .ok_or_else(|| AppError::NotFoundError(format!("Reservation not found: {}", id)))?;

    Ok(Json(ReservationResponse::from(reservation)))
}
