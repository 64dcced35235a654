//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Session file could not be read or written
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Stored or submitted JSON could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Account service call failed
    #[error("Account service error: {0}")]
    Gateway(String),

    /// Field key the form does not have
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Field value that is not a string
    #[error("Invalid value for field: {0}")]
    InvalidFieldValue(String),

    /// Role code other than `driver` / `fleet`
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UnknownField(_) | AuthError::InvalidFieldValue(_) => ErrorKind::BadRequest,
            AuthError::UnknownRole(_) => ErrorKind::NotFound,
            AuthError::Gateway(_) => ErrorKind::BadGateway,
            AuthError::Storage(_) => ErrorKind::ServiceUnavailable,
            AuthError::Serialization(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Session storage error");
            }
            AuthError::Serialization(e) => {
                tracing::error!(error = %e, "Session serialization error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Gateway(msg) => {
                tracing::warn!(message = %msg, "Account service call failed");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::Gateway("timeout".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AuthError::UnknownField("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::UnknownRole("admin".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        let io = std::io::Error::other("disk full");
        assert_eq!(
            AuthError::from(io).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
