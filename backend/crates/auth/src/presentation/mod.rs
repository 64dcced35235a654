//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the route guard middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{CurrentSession, GuardState, require_role};
pub use router::{auth_router, auth_router_generic};
