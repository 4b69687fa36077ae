//! Error types for the review collector.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Main error type for review collector operations
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Malformed or missing request input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backing store unreachable or write failed
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    /// Invalid startup configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for review collector operations
pub type Result<T> = std::result::Result<T, ServiceError>;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Config(_) | ServiceError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServiceError::Validation("field `text` is required".to_string());
        assert_eq!(err.to_string(), "Validation error: field `text` is required");
    }

    #[test]
    fn test_status_codes() {
        let validation = ServiceError::Validation("bad".into());
        assert_eq!(validation.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let storage: ServiceError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(storage, ServiceError::StorageUnavailable(_)));
        assert_eq!(storage.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
