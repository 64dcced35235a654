//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::DashboardAppState;
pub use router::{driver_router, fleet_router, landing_router};
