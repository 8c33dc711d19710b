//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use postboard_core::error::{DomainError, RepoError};
use postboard_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(Vec<String>),
    /// Any failure in the upload pipeline; the message is returned to the client.
    UploadFailed(String),
    Internal(String),
}

impl AppError {
    pub fn upload_failed(err: impl fmt::Display) -> Self {
        AppError::UploadFailed(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::UploadFailed(msg) => write!(f, "Upload failed: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UploadFailed(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Validation(errors) => ErrorResponse::validation_failed(errors.join(", ")),
            AppError::UploadFailed(detail) => {
                tracing::error!("Upload failed: {}", detail);
                ErrorResponse::internal_error().with_detail(detail)
            }
            AppError::Internal(detail) => {
                // Logged, never echoed
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => {
                AppError::NotFound(format!("{} not found", entity_type))
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        tracing::error!("Database error: {}", err);
        AppError::Internal("Database error".to_string())
    }
}

/// Build the actix error for a rejected request body, query, or path.
pub fn validation_error(err: impl fmt::Display) -> actix_web::Error {
    AppError::Validation(vec![err.to_string()]).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_uses_entity_name() {
        let err: AppError = DomainError::NotFound {
            entity_type: "Post",
            id: "999".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Post not found"));
    }

    #[test]
    fn test_repo_errors_are_internal() {
        let err: AppError = RepoError::Query("relation does not exist".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_upload_failure_is_server_error() {
        let err = AppError::upload_failed("Media store is not configured");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Upload failed: Media store is not configured");
    }
}
