use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use intake_provisioner::error::ProvisionError;
use intake_tracking::error::TrackingError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                // Downstream detail stays server-side; the caller gets a
                // generic body.
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<TrackingError> for ApiError {
    fn from(e: TrackingError) -> Self {
        match e {
            TrackingError::UnknownClient(id) => {
                ApiError::NotFound(format!("client not found: {id}"))
            }
            TrackingError::UnknownForm { form_id, .. } => {
                ApiError::NotFound(format!("no questions found for form: {form_id}"))
            }
            err @ TrackingError::ResponseCount { .. } => ApiError::BadRequest(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ProvisionError> for ApiError {
    fn from(e: ProvisionError) -> Self {
        match e {
            err @ (ProvisionError::MissingClientName | ProvisionError::NoFormsSelected) => {
                ApiError::BadRequest(err.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<intake_sheets::error::SheetsError> for ApiError {
    fn from(e: intake_sheets::error::SheetsError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
