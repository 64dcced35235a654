//! Dashboard Error Types
//!
//! This module provides dashboard-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::models::ErrorMap;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::EmergencyContactId;
use thiserror::Error;

/// Dashboard-specific result type alias
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Dashboard-specific error variants
#[derive(Debug, Error)]
pub enum DashboardError {
    /// New emergency contact failed field validation
    #[error("Emergency contact is invalid")]
    InvalidContact(ErrorMap),

    /// Profile edit failed field validation
    #[error("Driver profile is invalid")]
    InvalidProfile(ErrorMap),

    /// Help contact form failed field validation
    #[error("Support request is invalid")]
    InvalidSupportRequest(ErrorMap),

    /// Unknown filter or range in the query string
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// No emergency contact with this id
    #[error("Emergency contact not found: {0}")]
    ContactNotFound(EmergencyContactId),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::InvalidContact(_)
            | DashboardError::InvalidProfile(_)
            | DashboardError::InvalidSupportRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DashboardError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            DashboardError::ContactNotFound(_) => StatusCode::NOT_FOUND,
            DashboardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::InvalidContact(_)
            | DashboardError::InvalidProfile(_)
            | DashboardError::InvalidSupportRequest(_) => ErrorKind::UnprocessableEntity,
            DashboardError::InvalidQuery(_) => ErrorKind::BadRequest,
            DashboardError::ContactNotFound(_) => ErrorKind::NotFound,
            DashboardError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DashboardError::Internal(msg) => {
                tracing::error!(message = %msg, "Dashboard internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Dashboard error");
            }
        }
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        let app_error = AppError::new(err.kind(), err.to_string());
        match err {
            DashboardError::InvalidContact(errors)
            | DashboardError::InvalidProfile(errors)
            | DashboardError::InvalidSupportRequest(errors) => match serde_json::to_value(&errors) {
                Ok(details) => app_error.with_details(details),
                Err(_) => app_error,
            },
            _ => app_error,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_contact_carries_field_errors() {
        let mut errors = ErrorMap::new();
        errors.insert("phone", "Please enter a valid phone number");

        let app_error = AppError::from(DashboardError::InvalidContact(errors));

        assert_eq!(app_error.kind(), ErrorKind::UnprocessableEntity);
        assert_eq!(
            app_error.details().unwrap()["phone"],
            "Please enter a valid phone number"
        );
    }

    #[test]
    fn test_support_request_errors_are_422() {
        let mut errors = ErrorMap::new();
        errors.insert("subject", "Subject is required");

        let err = DashboardError::InvalidSupportRequest(errors);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            AppError::from(err).details().unwrap()["subject"],
            "Subject is required"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            DashboardError::InvalidQuery("range=2y".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DashboardError::ContactNotFound(EmergencyContactId::new()).status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
