//! Auth (Account Flow) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Roles, form values, sessions, collaborator traits
//! - `application/` - Validation, form state, submission, route guard
//! - `infra/` - Session storage and the simulated account service
//! - `presentation/` - HTTP handlers, DTOs, router, guard middleware
//!
//! ## Features
//! - Driver and fleet manager signup, login per role
//! - Forgot / reset password requests
//! - Session persisted under three local storage keys
//! - Role-gated dashboard routes (`/driver`, `/fleet`)
//!
//! ## Security Model
//! There is none beyond the role check. The stored session has no expiry
//! and no integrity protection, and anyone who can write the storage file
//! can claim any role.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemorySessionStore, LocalStorage, SimulatedAccountGateway};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::error_map::ErrorMap;
    pub use crate::domain::entity::form::{FormKind, FormValues, field};
    pub use crate::domain::entity::session::{Credentials, Profile, SessionRecord};
    pub use crate::domain::route::Route;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::domain::repository::SessionStore;
    pub use crate::infra::local_storage::{AUTH_KEY, ROLE_KEY, USER_KEY, LocalStorage};
    pub use crate::infra::memory::InMemorySessionStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
