//! Error types for learnhub.
//!
//! This module defines all error types used throughout the learnhub crate,
//! along with the HTTP status each one maps to when it reaches a handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// The main error type for learnhub operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Request Errors ===
    /// A required field was missing or empty.
    #[error("validation failed: {message}")]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// The request body could not be parsed.
    #[error("malformed request: {message}")]
    MalformedRequest {
        /// Description of what could not be parsed.
        message: String,
    },

    /// A lookup found nothing for the given key.
    #[error("{resource} not found: {key}")]
    NotFound {
        /// Kind of resource that was looked up.
        resource: &'static str,
        /// The key that had no match.
        key: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Server Errors ===
    /// Failed to bind the HTTP listener.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Address the server tried to bind.
        address: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system or socket operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for learnhub operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new malformed request error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Create a not found error for the given resource kind and key.
    #[must_use]
    pub fn not_found(resource: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            key: key.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error was caused by the caller's input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::MalformedRequest { .. } | Self::NotFound { .. }
        )
    }

    /// The HTTP status this error is reported with.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::debug!("Rejected request: {self}");
        } else {
            tracing::error!("Request failed: {self}");
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("name and email are required");
        assert_eq!(
            err.to_string(),
            "validation failed: name and email are required"
        );

        let err = Error::internal("test error");
        assert_eq!(err.to_string(), "internal error: test error");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("doc", "nonexistent");
        assert_eq!(err.to_string(), "doc not found: nonexistent");
    }

    #[test]
    fn test_malformed_display() {
        let err = Error::malformed("expected value at line 1 column 1");
        assert!(err.to_string().starts_with("malformed request"));
    }

    #[test]
    fn test_is_client_error() {
        assert!(Error::validation("x").is_client_error());
        assert!(Error::malformed("x").is_client_error());
        assert!(Error::not_found("user", "1").is_client_error());
        assert!(!Error::internal("x").is_client_error());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::malformed("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::not_found("doc", "x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_errors_are_4xx() {
        let errors = [
            Error::validation("x"),
            Error::malformed("x"),
            Error::not_found("doc", "x"),
            Error::internal("x"),
        ];
        for err in errors {
            assert_eq!(err.is_client_error(), err.status_code().is_client_error());
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "port out of range".to_string(),
        };
        assert!(err.to_string().contains("port out of range"));
    }

    #[test]
    fn test_bind_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = Error::Bind {
            address: "127.0.0.1:3000".to_string(),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("127.0.0.1:3000"));
        assert!(msg.contains("address in use"));
    }

    #[test]
    fn test_into_response_status() {
        let response = Error::validation("missing").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = Error::not_found("doc", "x").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
