//! Domain Layer
//!
//! Contains entities, value objects, repository traits, and domain services.

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

// Re-exports
pub use repository::{DriverRepository, FleetRepository};
pub use value_objects::{DrowsinessStatus, StatusFilter, TimeRange};
