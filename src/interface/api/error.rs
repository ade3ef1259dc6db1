//! HTTP error mapping

use super::dto::ErrorResponse;
use crate::application::CallError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Customer not found")]
    CustomerNotFound,

    /// Carries the full user-facing rejection message
    #[error("{0}")]
    CallNotAllowed(String),

    #[error("Failed to trigger call")]
    CallFailed(String),

    #[error("Invalid request body")]
    InvalidBody(String),
}

impl From<CallError> for ApiError {
    fn from(err: CallError) -> Self {
        match err {
            CallError::NotAllowed { .. } => ApiError::CallNotAllowed(err.to_string()),
            CallError::Dispatch(cause) => ApiError::CallFailed(cause.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::CustomerNotFound => {
                (StatusCode::NOT_FOUND, ErrorResponse::new(self.to_string()))
            }
            ApiError::CallNotAllowed(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message.clone()))
            }
            ApiError::CallFailed(cause) => {
                error!("API: Failed to trigger call: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_cause(self.to_string(), cause.clone()),
                )
            }
            ApiError::InvalidBody(detail) => {
                warn!("API: Rejected request body: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_cause(self.to_string(), detail.clone()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
