//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the catalog service.
///
/// Cache failures are represented here so that cache backends can report
/// them, but they are absorbed by the cache client and never reach a caller
/// of the product service.
#[derive(Error, Debug)]
pub enum CatalogError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("{resource_type} not found")]
    NotFound { resource_type: &'static str, id: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Primary or replica store failure
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalogError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this is a not-found outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error body for API responses.
///
/// Rendered as `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `CatalogError`.
    #[must_use]
    pub fn from_error(error: &CatalogError) -> Self {
        Self {
            error: error.to_string(),
        }
    }

    /// Creates an error response with an arbitrary message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&CatalogError> for ErrorResponse {
    fn from(error: &CatalogError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(CatalogError::not_found("Product", 1).status_code(), 404);
        assert_eq!(CatalogError::validation("missing name").status_code(), 400);
        assert_eq!(CatalogError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(CatalogError::cache("down").status_code(), 500);
        assert_eq!(CatalogError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CatalogError::not_found("Product", 1).error_code(), "NOT_FOUND");
        assert_eq!(CatalogError::validation("bad").error_code(), "VALIDATION_ERROR");
        assert_eq!(CatalogError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(CatalogError::cache("c").error_code(), "CACHE_ERROR");
        assert_eq!(CatalogError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::not_found("Product", 42);
        assert_eq!(err.to_string(), "Product not found");
        assert!(err.is_not_found());
        assert!(!CatalogError::Database("x".to_string()).is_not_found());
    }

    #[test]
    fn test_error_response_from_error() {
        let err = CatalogError::not_found("Product", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.error, "Product not found");
    }

    #[test]
    fn test_error_response_json_shape() {
        let response = ErrorResponse::message("boom");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "boom" }));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CatalogError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CatalogError::Internal(_)));
    }
}
