//! Dashboard Routers
//!
//! The driver and fleet routers are meant to be nested at `/driver` and
//! `/fleet`; both sit behind the route guard for their role.

use auth::middleware::{GuardState, require_role};
use auth::models::Role;
use auth::store::SessionStore;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::application::config::DashboardConfig;
use crate::domain::repository::{DriverRepository, FleetRepository};
use crate::presentation::handlers::{self, DashboardAppState};

/// Driver dashboard, guarded for drivers
pub fn driver_router<R, S>(repo: Arc<R>, store: Arc<S>, config: Arc<DashboardConfig>) -> Router
where
    R: DriverRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = DashboardAppState { repo, config };

    Router::new()
        .route("/", get(handlers::driver_overview::<R>))
        .route(
            "/profile",
            get(handlers::get_profile::<R>).put(handlers::put_profile::<R>),
        )
        .route(
            "/emergency-contacts",
            get(handlers::list_contacts::<R>).post(handlers::add_contact::<R>),
        )
        .route(
            "/emergency-contacts/{id}",
            delete(handlers::remove_contact::<R>),
        )
        .route(
            "/settings",
            get(handlers::get_settings::<R>).put(handlers::put_settings::<R>),
        )
        .route("/sos", post(handlers::activate_sos::<R>))
        .route("/help", get(handlers::help::<R>))
        .route("/help/contact", post(handlers::contact_support::<R>))
        .route_layer(from_fn_with_state(
            GuardState::new(store, Role::Driver),
            require_role::<S>,
        ))
        .with_state(state)
}

/// Fleet manager dashboard, guarded for fleet managers
pub fn fleet_router<R, S>(repo: Arc<R>, store: Arc<S>, config: Arc<DashboardConfig>) -> Router
where
    R: FleetRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = DashboardAppState { repo, config };

    Router::new()
        .route("/", get(handlers::fleet_overview::<R>))
        .route("/drivers", get(handlers::fleet_roster::<R>))
        .route("/analytics", get(handlers::fleet_analytics::<R>))
        .route_layer(from_fn_with_state(
            GuardState::new(store, Role::FleetManager),
            require_role::<S>,
        ))
        .with_state(state)
}

/// Public landing content
pub fn landing_router<R>(repo: Arc<R>, config: Arc<DashboardConfig>) -> Router
where
    R: FleetRepository + Clone + Send + Sync + 'static,
{
    let state = DashboardAppState { repo, config };

    Router::new()
        .route("/", get(handlers::landing::<R>))
        .with_state(state)
}
