//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mizan_core::InheritanceError;
use mizan_shared::{AppError, GoldPriceError};
use serde_json::json;
use tracing::warn;

/// Handler error rendered as `{"error": <code>, "message": <text>}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            warn!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<InheritanceError> for ApiError {
    fn from(err: InheritanceError) -> Self {
        Self(err.into())
    }
}

impl From<GoldPriceError> for ApiError {
    fn from(err: GoldPriceError) -> Self {
        Self(err.into())
    }
}
