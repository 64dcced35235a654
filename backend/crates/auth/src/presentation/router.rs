//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AccountGateway, SessionStore};
use crate::infra::SimulatedAccountGateway;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router backed by the simulated account service.
///
/// `store` must be the same instance the route guards read.
pub fn auth_router<S>(store: Arc<S>, config: &AuthConfig) -> Router
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let gateway = SimulatedAccountGateway::from_config(config);
    auth_router_generic(Arc::new(gateway), store)
}

/// Create a generic Auth router for any gateway and store implementation
pub fn auth_router_generic<G, S>(gateway: Arc<G>, store: Arc<S>) -> Router
where
    G: AccountGateway + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { gateway, store };

    Router::new()
        .route("/{role}/signup", post(handlers::sign_up::<G, S>))
        .route("/{role}/login", post(handlers::login::<G, S>))
        .route("/forgot-password", post(handlers::forgot_password::<G, S>))
        .route("/reset-password", post(handlers::reset_password::<G, S>))
        .route("/logout", post(handlers::logout::<G, S>))
        .route("/session", get(handlers::session_status::<G, S>))
        .with_state(state)
}
