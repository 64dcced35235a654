//! Dashboard Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Readings, roster, analytics, repository traits
//! - `application/` - Use cases
//! - `infra/` - Demo data and the in-memory repository
//! - `presentation/` - HTTP handlers and routers
//!
//! ## Screens
//! - Driver: overview, profile, emergency contacts, settings, SOS, help
//! - Fleet manager: overview, driver roster, analytics
//! - Landing page content
//!
//! Readings are fixed demo data; no sensor pipeline exists yet.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use infra::memory::InMemoryDashboard;
pub use presentation::router::{driver_router, fleet_router, landing_router};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

mod tests;
