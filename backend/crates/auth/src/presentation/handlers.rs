//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use serde_json::Value;
use std::sync::Arc;

use crate::application::{
    CheckSessionUseCase, FormState, SignOutUseCase, SubmissionCoordinator, SubmitOutcome,
};
use crate::domain::entity::form::{FormKind, FormValues};
use crate::domain::repository::{AccountGateway, SessionStore};
use crate::domain::value_object::Role;
use crate::error::AuthResult;
use crate::presentation::dto::{
    CompletedResponse, FormErrorsResponse, RedirectResponse, SessionStatusResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<G, S>
where
    G: AccountGateway + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub gateway: Arc<G>,
    pub store: Arc<S>,
}

// ============================================================================
// Form submission
// ============================================================================

/// POST /api/auth/{role}/signup
pub async fn sign_up<G, S>(
    State(state): State<AuthAppState<G, S>>,
    Path(role): Path<String>,
    Json(body): Json<Value>,
) -> AuthResult<Response>
where
    G: AccountGateway + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let role: Role = role.parse()?;
    submit_form(&state, FormKind::signup(role), &body).await
}

/// POST /api/auth/{role}/login
pub async fn login<G, S>(
    State(state): State<AuthAppState<G, S>>,
    Path(role): Path<String>,
    Json(body): Json<Value>,
) -> AuthResult<Response>
where
    G: AccountGateway + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let role: Role = role.parse()?;
    submit_form(&state, FormKind::Login(role), &body).await
}

/// POST /api/auth/forgot-password
pub async fn forgot_password<G, S>(
    State(state): State<AuthAppState<G, S>>,
    Json(body): Json<Value>,
) -> AuthResult<Response>
where
    G: AccountGateway + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    submit_form(&state, FormKind::ForgotPassword, &body).await
}

/// POST /api/auth/reset-password
pub async fn reset_password<G, S>(
    State(state): State<AuthAppState<G, S>>,
    Json(body): Json<Value>,
) -> AuthResult<Response>
where
    G: AccountGateway + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    submit_form(&state, FormKind::ResetPassword, &body).await
}

async fn submit_form<G, S>(
    state: &AuthAppState<G, S>,
    kind: FormKind,
    body: &Value,
) -> AuthResult<Response>
where
    G: AccountGateway + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let values = FormValues::from_nested_json(kind, body)?;
    let mut form = FormState::with_values(kind, values);

    let coordinator = SubmissionCoordinator::new(state.gateway.clone(), state.store.clone());
    let outcome = coordinator.submit(&mut form).await;

    Ok(outcome_response(outcome))
}

pub(crate) const BUSY_MESSAGE: &str = "A submission is already in progress.";

fn outcome_response(outcome: SubmitOutcome) -> Response {
    match outcome {
        SubmitOutcome::Navigate(route) => Json(RedirectResponse {
            redirect_to: route.path().to_string(),
        })
        .into_response(),
        SubmitOutcome::Completed => Json(CompletedResponse { completed: true }).into_response(),
        SubmitOutcome::Invalid(errors) => form_errors(
            ErrorKind::UnprocessableEntity,
            FormErrorsResponse { errors },
        ),
        SubmitOutcome::Failed(message) => {
            form_errors(ErrorKind::BadGateway, FormErrorsResponse::general(message))
        }
        SubmitOutcome::Busy => {
            form_errors(ErrorKind::Conflict, FormErrorsResponse::general(BUSY_MESSAGE))
        }
    }
}

fn form_errors(kind: ErrorKind, body: FormErrorsResponse) -> Response {
    let status =
        StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(body)).into_response()
}

// ============================================================================
// Session
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<G, S>(
    State(state): State<AuthAppState<G, S>>,
) -> AuthResult<Json<RedirectResponse>>
where
    G: AccountGateway + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let use_case = SignOutUseCase::new(state.store.clone());
    let route = use_case.execute().await?;

    Ok(Json(RedirectResponse {
        redirect_to: route.path().to_string(),
    }))
}

/// GET /api/auth/session
pub async fn session_status<G, S>(
    State(state): State<AuthAppState<G, S>>,
) -> AuthResult<Json<SessionStatusResponse>>
where
    G: AccountGateway + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let use_case = CheckSessionUseCase::new(state.store.clone());
    let session = use_case.execute().await?;

    Ok(Json(SessionStatusResponse::from(session)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::error_map::ErrorMap;
    use crate::domain::route::Route;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_busy_is_conflict_with_general_error() {
        let response = outcome_response(SubmitOutcome::Busy);

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["errors"]["general"], BUSY_MESSAGE);
    }

    #[tokio::test]
    async fn test_error_outcomes_follow_error_kinds() {
        let mut errors = ErrorMap::new();
        errors.insert("email", "Email is required");

        let invalid = outcome_response(SubmitOutcome::Invalid(errors));
        assert_eq!(
            invalid.status().as_u16(),
            ErrorKind::UnprocessableEntity.status_code()
        );

        let failed = outcome_response(SubmitOutcome::Failed("Login failed.".into()));
        assert_eq!(failed.status().as_u16(), ErrorKind::BadGateway.status_code());

        let navigate = outcome_response(SubmitOutcome::Navigate(Route::Landing));
        assert_eq!(navigate.status(), StatusCode::OK);
        assert_eq!(body_json(navigate).await["redirectTo"], "/");
    }
}
