//! In-memory dashboard repository
//!
//! Readings and help content are fixed demo data. Contacts, settings, the
//! profile, SOS events and support requests are mutable and live as long
//! as the process.

use kernel::id::EmergencyContactId;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::entities::{
    DriverOverview, DriverProfile, DriverSettings, EmergencyContact, FleetAnalytics,
    FleetOverview, HelpContent, LandingContent, RosterDriver, SosEvent, SupportTicket,
};
use crate::domain::repository::{DriverRepository, FleetRepository};
use crate::domain::value_objects::TimeRange;
use crate::error::{DashboardError, DashboardResult};
use crate::infra::fixtures;

#[derive(Debug, Default)]
struct DriverState {
    contacts: Vec<EmergencyContact>,
    settings: DriverSettings,
    profile: DriverProfile,
    sos_events: Vec<SosEvent>,
    support_requests: Vec<SupportTicket>,
}

/// Demo repository; clones share state.
#[derive(Debug, Clone)]
pub struct InMemoryDashboard {
    state: Arc<RwLock<DriverState>>,
}

impl Default for InMemoryDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDashboard {
    /// Seeded with the demo emergency contacts, profile and default settings
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(DriverState {
                contacts: fixtures::emergency_contacts(),
                profile: fixtures::driver_profile(),
                ..Default::default()
            })),
        }
    }

    /// SOS activations recorded so far
    pub fn sos_events(&self) -> DashboardResult<Vec<SosEvent>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.sos_events.clone())
    }

    /// Contact form submissions received so far
    pub fn support_requests(&self) -> DashboardResult<Vec<SupportTicket>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.support_requests.clone())
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DashboardError {
    DashboardError::Internal("dashboard state lock poisoned".to_string())
}

impl DriverRepository for InMemoryDashboard {
    async fn overview(&self) -> DashboardResult<DriverOverview> {
        Ok(fixtures::driver_overview())
    }

    async fn emergency_contacts(&self) -> DashboardResult<Vec<EmergencyContact>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.contacts.clone())
    }

    async fn add_emergency_contact(&self, contact: &EmergencyContact) -> DashboardResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.contacts.push(contact.clone());
        Ok(())
    }

    async fn remove_emergency_contact(&self, id: &EmergencyContactId) -> DashboardResult<bool> {
        let mut state = self.state.write().map_err(poisoned)?;
        let before = state.contacts.len();
        state.contacts.retain(|contact| contact.id != *id);
        Ok(state.contacts.len() != before)
    }

    async fn settings(&self) -> DashboardResult<DriverSettings> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.settings.clone())
    }

    async fn replace_settings(&self, settings: &DriverSettings) -> DashboardResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.settings = settings.clone();
        Ok(())
    }

    async fn record_sos(&self, event: &SosEvent) -> DashboardResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.sos_events.push(event.clone());
        Ok(())
    }

    async fn profile(&self) -> DashboardResult<DriverProfile> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.profile.clone())
    }

    async fn replace_profile(&self, profile: &DriverProfile) -> DashboardResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.profile = profile.clone();
        Ok(())
    }

    async fn help(&self) -> DashboardResult<HelpContent> {
        Ok(fixtures::help())
    }

    async fn record_support_request(&self, ticket: &SupportTicket) -> DashboardResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.support_requests.push(ticket.clone());
        Ok(())
    }
}

impl FleetRepository for InMemoryDashboard {
    async fn overview(&self) -> DashboardResult<FleetOverview> {
        Ok(fixtures::fleet_overview())
    }

    async fn roster(&self) -> DashboardResult<Vec<RosterDriver>> {
        Ok(fixtures::roster())
    }

    async fn analytics(&self, range: TimeRange) -> DashboardResult<FleetAnalytics> {
        Ok(fixtures::analytics(range))
    }

    async fn landing(&self) -> DashboardResult<LandingContent> {
        Ok(fixtures::landing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewEmergencyContact;

    #[tokio::test]
    async fn test_contacts_add_and_remove() {
        let repo = InMemoryDashboard::new();
        assert_eq!(repo.emergency_contacts().await.unwrap().len(), 2);

        let contact = NewEmergencyContact {
            name: "Ann Lee".to_string(),
            phone: "555-0100".to_string(),
            relationship: "Sister".to_string(),
        }
        .into_contact();
        repo.add_emergency_contact(&contact).await.unwrap();
        assert_eq!(repo.emergency_contacts().await.unwrap().len(), 3);

        assert!(repo.remove_emergency_contact(&contact.id).await.unwrap());
        assert!(!repo.remove_emergency_contact(&contact.id).await.unwrap());
        assert_eq!(repo.emergency_contacts().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_settings() {
        let repo = InMemoryDashboard::new();
        let other = repo.clone();
        let mut settings = DriverSettings::default();
        settings.language = "es".to_string();

        repo.replace_settings(&settings).await.unwrap();

        assert_eq!(other.settings().await.unwrap().language, "es");
    }

    #[tokio::test]
    async fn test_profile_starts_from_demo_record() {
        let repo = InMemoryDashboard::new();
        let mut profile = repo.profile().await.unwrap();
        assert_eq!(profile.license_id, "DL123456789");

        profile.phone = "555-0199".to_string();
        repo.replace_profile(&profile).await.unwrap();

        assert_eq!(repo.clone().profile().await.unwrap().phone, "555-0199");
    }
}
