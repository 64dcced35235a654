//! Route Guard Middleware
//!
//! Fronts the role-gated dashboard routers. Every request re-reads the
//! session store; nothing is cached between requests.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::{GuardDecision, RouteGuardUseCase};
use crate::domain::entity::session::SessionRecord;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::Role;

/// Middleware state
#[derive(Clone)]
pub struct GuardState<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub required: Role,
}

impl<S> GuardState<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>, required: Role) -> Self {
        Self { store, required }
    }
}

/// Session of the signed-in user, inserted for downstream handlers
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionRecord);

/// Let the request through when the stored session has the required
/// role. Otherwise answer `303 See Other` pointing at the login page (no
/// session) or the landing page (other role).
pub async fn require_role<S>(
    State(state): State<GuardState<S>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let use_case = RouteGuardUseCase::new(state.store.clone());

    match use_case.execute(state.required).await {
        Ok(GuardDecision::Allow(session)) => {
            req.extensions_mut().insert(CurrentSession(session));
            next.run(req).await
        }
        Ok(GuardDecision::Redirect(route)) => Redirect::to(route.path()).into_response(),
        Err(e) => e.into_response(),
    }
}
