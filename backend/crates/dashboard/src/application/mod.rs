//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod driver;
pub mod fleet;
pub mod help;
pub mod landing;
pub mod sos;

// Re-exports
pub use config::DashboardConfig;
pub use driver::DriverDashboardUseCase;
pub use fleet::{FleetDashboardUseCase, RosterOutput, RosterQuery};
pub use help::{DriverHelpUseCase, SupportOutput};
pub use landing::LandingUseCase;
pub use sos::{ActivateSosUseCase, SosOutput};
