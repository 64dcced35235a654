//! Infrastructure Layer
//!
//! Session storage and the simulated account service.

pub mod local_storage;
pub mod memory;
pub mod simulated_gateway;

pub use local_storage::LocalStorage;
pub use memory::InMemorySessionStore;
pub use simulated_gateway::{GatewayMode, SimulatedAccountGateway};
