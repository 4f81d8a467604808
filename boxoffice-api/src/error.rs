use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use boxoffice_engine::{HoldRejected, ReserveRejected};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    AuthorizationError(String),
    NotFoundError(String),
    ConflictError(String),
    GoneError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AuthorizationError(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::GoneError(msg) => (StatusCode::GONE, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<HoldRejected> for AppError {
    fn from(reason: HoldRejected) -> Self {
        match reason {
            HoldRejected::MissingCustomer | HoldRejected::InvalidSeatCount => {
                AppError::ValidationError(reason.to_string())
            }
            HoldRejected::InsufficientSeats { .. } | HoldRejected::NoContiguousBlock { .. } => {
                AppError::ConflictError(reason.to_string())
            }
            HoldRejected::IdentifiersExhausted => AppError::InternalServerError(reason.to_string()),
        }
    }
}

impl From<ReserveRejected> for AppError {
    fn from(reason: ReserveRejected) -> Self {
        match reason {
            ReserveRejected::MissingCustomer => AppError::ValidationError(reason.to_string()),
            ReserveRejected::HoldNotFound(_) => AppError::NotFoundError(reason.to_string()),
            ReserveRejected::HoldExpired(_) => AppError::GoneError(reason.to_string()),
            ReserveRejected::CustomerMismatch(_) => AppError::AuthorizationError(reason.to_string()),
        }
    }
}
