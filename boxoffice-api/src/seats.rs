use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use boxoffice_core::{SeatStatus, TicketService};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: usize,
    pub capacity: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeatResponse {
    pub index: usize,
    pub row: u32,
    pub column: u32,
    pub status: SeatStatus,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/seats/available", get(available_seats))
        .route("/v1/seats/{index}", get(get_seat))
}

/// GET /v1/seats/available
async fn available_seats(State(state): State<AppState>) -> Json<AvailabilityResponse> {
    Json(AvailabilityResponse {
        available: state.engine.number_of_seats_available(),
        capacity: state.venue.number_of_seats(),
    })
}

/// GET /v1/seats/{index}
/// Raw table entry; a HELD seat may belong to a lapsed hold.
async fn get_seat(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SeatResponse>, AppError> {
    let not_found = || AppError::NotFoundError(format!("Seat not found: {}", index));
    let (row, column) = state.venue.seat_position(index).ok_or_else(not_found)?;
    let seat = state.engine.seat(index).ok_or_else(not_found)?;

    Ok(Json(SeatResponse {
        index,
        row,
        column,
        status: seat.status(),
    }))
}
