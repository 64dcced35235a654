//! Infrastructure Layer
//!
//! Demo data and the in-memory repository.

pub mod fixtures;
pub mod memory;

pub use memory::InMemoryDashboard;
