//! Activate SOS Use Case
//!
//! Records the activation and acknowledges it. Nobody is actually
//! contacted yet.

use std::sync::Arc;

use crate::application::config::DashboardConfig;
use crate::domain::entities::SosEvent;
use crate::domain::repository::DriverRepository;
use crate::error::DashboardResult;

/// SOS acknowledgement
#[derive(Debug, Clone)]
pub struct SosOutput {
    pub event: SosEvent,
    pub message: String,
}

pub struct ActivateSosUseCase<R>
where
    R: DriverRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
    config: Arc<DashboardConfig>,
}

impl<R> ActivateSosUseCase<R>
where
    R: DriverRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<DashboardConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, driver: Option<String>) -> DashboardResult<SosOutput> {
        let event = SosEvent::new(driver);
        self.repo.record_sos(&event).await?;

        tracing::warn!(
            sos_id = %event.id,
            driver = event.driver.as_deref().unwrap_or("unknown"),
            activated_at = %event.activated_at,
            "Emergency SOS activated"
        );

        Ok(SosOutput {
            event,
            message: self.config.sos_message.clone(),
        })
    }
}
