//! Route Guard
//!
//! Decides per request whether a role-gated route may be shown.

use std::sync::Arc;

use crate::domain::entity::session::SessionRecord;
use crate::domain::repository::SessionStore;
use crate::domain::route::Route;
use crate::domain::value_object::Role;
use crate::error::AuthResult;

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Allow(SessionRecord),
    Redirect(Route),
}

/// No session sends the user to the role's login page; a session of the
/// other role (or an unknown one) goes back to the landing page.
pub fn guard(required: Role, session: Option<SessionRecord>) -> GuardDecision {
    match session {
        Some(record) if record.authenticated => {
            if record.has_role(required) {
                GuardDecision::Allow(record)
            } else {
                GuardDecision::Redirect(Route::Landing)
            }
        }
        _ => GuardDecision::Redirect(required.login_route()),
    }
}

/// Route guard use case
pub struct RouteGuardUseCase<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    store: Arc<S>,
}

impl<S> RouteGuardUseCase<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, required: Role) -> AuthResult<GuardDecision> {
        let session = self.store.read().await?;
        let decision = guard(required, session);
        if let GuardDecision::Redirect(route) = &decision {
            tracing::debug!(required = %required, redirect = %route, "Route guard redirect");
        }
        Ok(decision)
    }
}
