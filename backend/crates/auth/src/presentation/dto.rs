//! API DTOs (Data Transfer Objects)
//!
//! Form submissions arrive as the nested JSON object the form renders
//! (`{"name": "...", "emergencyContact": {"phone": "..."}}`), so there is
//! no request struct per form.

use serde::Serialize;
use serde_json::Value;

use crate::domain::entity::{error_map::ErrorMap, form::field, session::SessionRecord};

// ============================================================================
// Submit
// ============================================================================

/// Signed in; the client should navigate to `redirect_to`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    pub redirect_to: String,
}

/// Password recovery step accepted
#[derive(Debug, Clone, Serialize)]
pub struct CompletedResponse {
    pub completed: bool,
}

/// Field errors (422) or the banner error under `general` (502)
#[derive(Debug, Clone, Serialize)]
pub struct FormErrorsResponse {
    pub errors: ErrorMap,
}

impl FormErrorsResponse {
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = ErrorMap::new();
        errors.insert(field::GENERAL, message);
        Self { errors }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub role: Option<String>,
    pub user: Option<Value>,
}

impl From<Option<SessionRecord>> for SessionStatusResponse {
    fn from(session: Option<SessionRecord>) -> Self {
        match session {
            Some(record) => Self {
                authenticated: record.authenticated,
                role: record.role.map(|role| role.code().to_string()),
                user: Some(Value::Object(record.profile.as_map().clone())),
            },
            None => Self {
                authenticated: false,
                role: None,
                user: None,
            },
        }
    }
}
