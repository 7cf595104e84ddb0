//! API error taxonomy and its mapping onto HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hms_core::StoreError;
use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    /// Field-level messages, present only for body-validation failures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Everything a handler can fail with.
///
/// - `Validation` and `DuplicateTcNo` map to 400
/// - `NotFound` maps to 404
/// - `Inconsistent` (a dangling reference hit by a join view) and `Internal`
///   map to 500
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request body")]
    Validation { errors: Vec<String> },

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("a patient with this tc_no is already registered")]
    DuplicateTcNo,

    #[error(transparent)]
    Inconsistent(#[from] StoreError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![message.into()],
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            errors: vec![rejection.body_text()],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match &self {
            ApiError::Validation { errors } => (StatusCode::BAD_REQUEST, errors.clone()),
            ApiError::DuplicateTcNo => (StatusCode::BAD_REQUEST, Vec::new()),
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, Vec::new()),
            ApiError::Inconsistent(_) | ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
        }

        let body = ErrorBody {
            message: self.to_string(),
            errors,
        };
        (status, Json(body)).into_response()
    }
}
