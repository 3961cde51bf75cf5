use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sift_core::ValidationError;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(#[from] ValidationError),

    #[error("Invalid request body")]
    Body(#[from] JsonRejection),

    #[error("Invalid query")]
    Query(String),

    #[error("Internal server error")]
    Internal(String),
}

/// Failure envelope returned for every rejected request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub errors: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub request_id: Uuid,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Body(_) | Self::Query(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Vec<String> {
        match self {
            Self::Validation(e) => e.errors.clone(),
            Self::Body(rejection) => vec![rejection.body_text()],
            Self::Query(reason) => vec![reason.clone()],
            // Internal detail stays in the log.
            Self::Internal(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            success: false,
            message: self.to_string(),
            errors: self.details(),
            timestamp: Utc::now(),
            request_id: Uuid::now_v7(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.body();
        match &self {
            Self::Internal(detail) => error!("Request {} failed: {detail}", body.request_id),
            _ => warn!(
                "Request {} rejected: {}",
                body.request_id,
                body.errors.join("; ")
            ),
        }
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_violation() {
        let err = ApiError::from(ValidationError {
            errors: vec!["Invalid email format".to_string(), "bad phone".to_string()],
        });
        let body = err.body();

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!body.success);
        assert_eq!(body.message, "Validation failed");
        assert_eq!(body.errors.len(), 2);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = ApiError::Internal("worker panicked".to_string());
        let body = err.body();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.errors.is_empty());
        assert_eq!(body.message, "Internal server error");
    }

    #[test]
    fn test_request_ids_are_unique() {
        let err = ApiError::Query("empty".to_string());
        assert_ne!(err.body().request_id, err.body().request_id);
    }
}
