//! Domain Layer
//!
//! Contains entities, value objects, navigation targets and the
//! collaborator traits.

pub mod entity;
pub mod repository;
pub mod route;
pub mod value_object;

// Re-exports
pub use entity::{
    error_map::ErrorMap,
    form::{FormKind, FormValues},
    session::{Credentials, Profile, SessionRecord},
};
pub use repository::{AccountGateway, SessionStore};
pub use route::Route;
pub use value_object::Role;
