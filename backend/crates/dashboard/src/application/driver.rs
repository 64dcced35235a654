//! Driver Dashboard Use Case
//!
//! Overview readings, profile, emergency contacts and settings of the
//! signed-in driver.

use kernel::id::EmergencyContactId;
use std::sync::Arc;

use crate::domain::entities::{
    DriverOverview, DriverProfile, DriverSettings, EmergencyContact, NewEmergencyContact,
};
use crate::domain::repository::DriverRepository;
use crate::domain::services::{validate_contact, validate_profile};
use crate::error::{DashboardError, DashboardResult};

pub struct DriverDashboardUseCase<R>
where
    R: DriverRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> DriverDashboardUseCase<R>
where
    R: DriverRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn overview(&self) -> DashboardResult<DriverOverview> {
        self.repo.overview().await
    }

    pub async fn profile(&self) -> DashboardResult<DriverProfile> {
        self.repo.profile().await
    }

    /// Validate and store the edited profile
    pub async fn update_profile(&self, profile: DriverProfile) -> DashboardResult<DriverProfile> {
        let errors = validate_profile(&profile);
        if !errors.is_empty() {
            return Err(DashboardError::InvalidProfile(errors));
        }

        self.repo.replace_profile(&profile).await?;
        tracing::info!(vehicle_id = %profile.vehicle_id, "Driver profile updated");
        Ok(profile)
    }

    pub async fn contacts(&self) -> DashboardResult<Vec<EmergencyContact>> {
        self.repo.emergency_contacts().await
    }

    /// Validate and store a new contact
    pub async fn add_contact(
        &self,
        input: NewEmergencyContact,
    ) -> DashboardResult<EmergencyContact> {
        let errors = validate_contact(&input);
        if !errors.is_empty() {
            return Err(DashboardError::InvalidContact(errors));
        }

        let contact = input.into_contact();
        self.repo.add_emergency_contact(&contact).await?;

        tracing::info!(contact_id = %contact.id, "Emergency contact added");
        Ok(contact)
    }

    pub async fn remove_contact(&self, id: EmergencyContactId) -> DashboardResult<()> {
        if !self.repo.remove_emergency_contact(&id).await? {
            return Err(DashboardError::ContactNotFound(id));
        }
        tracing::info!(contact_id = %id, "Emergency contact removed");
        Ok(())
    }

    pub async fn settings(&self) -> DashboardResult<DriverSettings> {
        self.repo.settings().await
    }

    /// Replace all settings at once
    pub async fn update_settings(&self, settings: DriverSettings) -> DashboardResult<DriverSettings> {
        self.repo.replace_settings(&settings).await?;
        tracing::debug!(language = %settings.language, "Driver settings replaced");
        Ok(settings)
    }
}
