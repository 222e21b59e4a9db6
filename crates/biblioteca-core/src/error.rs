//! Unified error types for all layers of the application.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Biblioteca.
///
/// Dangling references (a book pointing at a deleted author or genre) are
/// deliberately *not* represented here: reads tolerate them by resolving the
/// missing side to `None` instead of failing.
#[derive(Error, Debug)]
pub enum BibliotecaError {
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Underlying persistence failure
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BibliotecaError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Store(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Store(_) => "STORE_ERROR",
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

    /// Creates a store error.
    #[must_use]
    pub fn store<T: Into<String>>(message: T) -> Self {
        Self::Store(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks whether this error maps to a client fault (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Validation(_))
    }
}

impl From<serde_json::Error> for BibliotecaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(BibliotecaError::not_found("Livro", "abc").status_code(), 404);
        assert_eq!(BibliotecaError::validation("titulo em branco").status_code(), 400);
        assert_eq!(BibliotecaError::store("connection lost").status_code(), 500);
        assert_eq!(BibliotecaError::internal("oops").status_code(), 500);
        assert_eq!(
            BibliotecaError::Configuration("missing port".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BibliotecaError::not_found("Autor", 1).error_code(), "NOT_FOUND");
        assert_eq!(BibliotecaError::validation("bad").error_code(), "VALIDATION_ERROR");
        assert_eq!(BibliotecaError::store("down").error_code(), "STORE_ERROR");
        assert_eq!(BibliotecaError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(BibliotecaError::not_found("Livro", 1).is_client_error());
        assert!(BibliotecaError::validation("bad input").is_client_error());
        assert!(!BibliotecaError::store("down").is_client_error());
        assert!(!BibliotecaError::internal("boom").is_client_error());
    }

    #[test]
    fn test_error_display() {
        let err = BibliotecaError::not_found("Livro", "42");
        assert!(err.to_string().contains("Livro"));
        assert!(err.to_string().contains("42"));

        let err = BibliotecaError::validation("titulo is required");
        assert!(err.to_string().contains("titulo is required"));
    }
}
