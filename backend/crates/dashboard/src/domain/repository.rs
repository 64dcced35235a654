//! Repository Traits
//!
//! Where dashboard data comes from. The only implementation today serves
//! fixed demo data from memory.

use kernel::id::EmergencyContactId;

use crate::domain::entities::{
    DriverOverview, DriverProfile, DriverSettings, EmergencyContact, FleetAnalytics,
    FleetOverview, HelpContent, LandingContent, RosterDriver, SosEvent, SupportTicket,
};
use crate::domain::value_objects::TimeRange;
use crate::error::DashboardResult;

/// Driver screen data
#[trait_variant::make(DriverRepository: Send)]
pub trait LocalDriverRepository {
    async fn overview(&self) -> DashboardResult<DriverOverview>;

    async fn emergency_contacts(&self) -> DashboardResult<Vec<EmergencyContact>>;

    /// Append a contact that already passed validation
    async fn add_emergency_contact(&self, contact: &EmergencyContact) -> DashboardResult<()>;

    /// Returns false when no contact has this id
    async fn remove_emergency_contact(&self, id: &EmergencyContactId) -> DashboardResult<bool>;

    async fn settings(&self) -> DashboardResult<DriverSettings>;

    async fn replace_settings(&self, settings: &DriverSettings) -> DashboardResult<()>;

    async fn record_sos(&self, event: &SosEvent) -> DashboardResult<()>;

    async fn profile(&self) -> DashboardResult<DriverProfile>;

    /// Store a profile that already passed validation
    async fn replace_profile(&self, profile: &DriverProfile) -> DashboardResult<()>;

    async fn help(&self) -> DashboardResult<HelpContent>;

    /// Keep a contact form submission that already passed validation
    async fn record_support_request(&self, ticket: &SupportTicket) -> DashboardResult<()>;
}

/// Fleet screen and landing page data
#[trait_variant::make(FleetRepository: Send)]
pub trait LocalFleetRepository {
    async fn overview(&self) -> DashboardResult<FleetOverview>;

    async fn roster(&self) -> DashboardResult<Vec<RosterDriver>>;

    async fn analytics(&self, range: TimeRange) -> DashboardResult<FleetAnalytics>;

    async fn landing(&self) -> DashboardResult<LandingContent>;
}
