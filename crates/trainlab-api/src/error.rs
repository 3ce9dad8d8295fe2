//! API error types and handling
//!
//! Every failure leaves the API through [`ApiError`], which fixes the wire
//! status and the `{"error": "..."}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use trainlab_domain::DomainError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller could not be identified (401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Caller may not act on this resource (403)
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Project or training example does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required field was absent or empty (400)
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Request was present but invalid (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Project type has no support for the operation (501)
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Unexpected failure (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Wire status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::Authorization(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingData(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the body
    pub fn wire_message(&self) -> &str {
        match self {
            ApiError::Authentication(_) => "Not authorised",
            ApiError::Authorization(_) => "Forbidden",
            ApiError::NotFound(_) => "Not found",
            ApiError::MissingData(_) => "Missing data",
            ApiError::BadRequest(reason) => reason,
            ApiError::NotImplemented(_) => "Not implemented",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EntityNotFound { entity_type, id } => {
                ApiError::NotFound(format!("{} {}", entity_type, id))
            }
            DomainError::Forbidden { reason } => ApiError::Authorization(reason),
            ref missing @ DomainError::ValidationError { .. } if missing.is_missing_field() => {
                ApiError::MissingData(missing.to_string())
            }
            DomainError::ValidationError { reason, .. } => ApiError::BadRequest(reason),
            DomainError::InvalidProjectType { value } => {
                ApiError::BadRequest(format!("Invalid project type: {}", value))
            }
            err @ DomainError::NotImplemented { .. } => ApiError::NotImplemented(err.to_string()),
            DomainError::StoreFailure { reason } => ApiError::Internal(reason),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(detail) => tracing::error!(%detail, "request failed"),
            other => tracing::debug!(%status, error = %other, "request rejected"),
        }

        let body = Json(json!({ "error": self.wire_message() }));
        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
